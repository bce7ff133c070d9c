//! 地址编解码模块
//!
//! 从secp256k1私钥派生EVM与TRON地址，并支持两种表示之间的互转。
//! 两条链共享同一份20字节payload：EVM侧是EIP-55校验和大小写的hex形式，
//! TRON侧是0x41前缀加Base58Check的 T 开头形式。

use k256::ecdsa::{RecoveryId, Signature as EcdsaSignature, VerifyingKey};

use crate::crypto::base58;
use crate::crypto::keccak::{keccak256, keccak256_hex};
use crate::crypto::keys;
use crate::domain::payment::Signature;
use crate::error::{SignerError, SignerResult};

/// TRON 地址前缀字节（mainnet）
const TRON_PREFIX: u8 = 0x41;

/// 从私钥派生EVM地址（EIP-55校验和大小写）
pub fn derive_evm_address(private_key: &str) -> SignerResult<String> {
    let signing_key = keys::signing_key_from_hex(private_key)?;
    let verifying_key = signing_key.verifying_key();
    Ok(to_checksum_address(&verifying_key_to_address(verifying_key)))
}

/// 从公钥计算EVM地址（小写，无校验和）
///
/// 未压缩公钥去掉0x04标记字节后取64字节X‖Y，Keccak-256后取末20字节。
pub fn verifying_key_to_address(key: &VerifyingKey) -> String {
    let point = key.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    format!("0x{}", hex::encode(&hash[12..]))
}

/// 地址转EIP-55校验和格式
///
/// 对小写地址的keccak256逐nibble比较：哈希nibble >= 8 时对应字母转大写。
/// 每次都重新计算，不缓存。
pub fn to_checksum_address(address: &str) -> String {
    let address_lower = address
        .strip_prefix("0x")
        .unwrap_or(address)
        .to_lowercase();
    let hash_hex = keccak256_hex(address_lower.as_bytes());

    let mut result = String::with_capacity(42);
    result.push_str("0x");
    for (ch, hash_ch) in address_lower.chars().zip(hash_hex.chars()) {
        if ch.is_ascii_alphabetic() && hash_ch.to_digit(16).unwrap_or(0) >= 8 {
            result.push(ch.to_ascii_uppercase());
        } else {
            result.push(ch);
        }
    }

    result
}

/// 从私钥派生TRON地址
///
/// 复用EVM派生的20字节payload：0x41 ‖ payload，Base58Check编码后以 T 开头。
pub fn derive_tron_address(private_key: &str) -> SignerResult<String> {
    let evm_address = derive_evm_address(private_key)?;
    evm_to_tron_address(&evm_address)
}

/// EVM地址转TRON地址（纯表示转换，不涉及密钥）
pub fn evm_to_tron_address(evm_address: &str) -> SignerResult<String> {
    let payload = decode_evm_address(evm_address)?;

    let mut tron_payload = Vec::with_capacity(21);
    tron_payload.push(TRON_PREFIX);
    tron_payload.extend_from_slice(&payload);

    Ok(base58::encode_check(&tron_payload))
}

/// TRON地址转EVM地址
///
/// 已是0x前缀的输入原样透传。解码后校验0x41前缀与21字节长度。
pub fn tron_to_evm_address(tron_address: &str) -> SignerResult<String> {
    if tron_address.starts_with("0x") || tron_address.starts_with("0X") {
        return Ok(tron_address.to_string());
    }

    let payload = base58::decode_check(tron_address)?;
    if payload.len() != 21 || payload[0] != TRON_PREFIX {
        return Err(SignerError::InvalidInput(format!(
            "not a TRON address payload: {tron_address}"
        )));
    }

    Ok(format!("0x{}", hex::encode(&payload[1..])))
}

/// EVM地址有效性校验（含EIP-55大小写校验）
///
/// 全小写或全大写视为无校验和地址，混合大小写时校验EIP-55。
pub fn is_valid_address(address: &str) -> bool {
    let hex_part = match address.strip_prefix("0x") {
        Some(h) => h,
        None => return false,
    };

    if hex_part.len() != 40 || !hex_part.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }

    let has_upper = hex_part.bytes().any(|b| b.is_ascii_uppercase());
    let has_lower = hex_part.bytes().any(|b| b.is_ascii_lowercase());
    if !(has_upper && has_lower) {
        return true;
    }

    to_checksum_address(address) == format!("0x{hex_part}")
}

/// 从签名摘要恢复签名者的EVM地址（小写）
///
/// `v` 只接受legacy形式27/28。
pub fn recover_address(digest: &[u8; 32], signature: &Signature) -> SignerResult<String> {
    let recovery_id = match signature.v {
        27 => RecoveryId::new(false, false),
        28 => RecoveryId::new(true, false),
        v => {
            return Err(SignerError::InvalidInput(format!(
                "invalid recovery byte: {v}"
            )))
        }
    };

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);

    let sig = EcdsaSignature::from_slice(&sig_bytes)
        .map_err(|e| SignerError::InvalidInput(format!("invalid signature: {e}")))?;

    let verifying_key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|e| SignerError::InvalidInput(format!("recovery failed: {e}")))?;

    Ok(verifying_key_to_address(&verifying_key))
}

/// 解码0x地址为20字节payload
fn decode_evm_address(address: &str) -> SignerResult<[u8; 20]> {
    let hex_part = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address)
        .to_lowercase();

    if hex_part.len() != 40 {
        return Err(SignerError::InvalidInput(format!(
            "EVM address must be 20 bytes: {address}"
        )));
    }

    let bytes = hex::decode(&hex_part)
        .map_err(|_| SignerError::InvalidInput(format!("invalid EVM address hex: {address}")))?;
    let mut result = [0u8; 20];
    result.copy_from_slice(&bytes);
    Ok(result)
}
