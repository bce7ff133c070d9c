//! Base58 / Base58Check 编解码
//!
//! TRON地址使用Bitcoin字母表的Base58Check编码：
//! payload后附加double-SHA-256的前4字节作为校验和。
//! 解码侧校验和不匹配是硬错误，绝不静默剥离。

use sha2::{Digest, Sha256};

use crate::error::{SignerError, SignerResult};

/// 校验和长度（字节）
const CHECKSUM_LEN: usize = 4;

/// Base58编码（Bitcoin字母表）
///
/// 每个前导零字节编码为一个前导 '1'。
pub fn encode(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Base58解码
///
/// 字母表外的字符返回错误而非panic。
pub fn decode(encoded: &str) -> SignerResult<Vec<u8>> {
    bs58::decode(encoded)
        .into_vec()
        .map_err(|e| SignerError::InvalidInput(format!("invalid base58 string: {e}")))
}

/// Base58Check编码：payload ‖ 前4字节double-SHA-256校验和
pub fn encode_check(payload: &[u8]) -> String {
    let mut bytes = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    bytes.extend_from_slice(payload);
    bytes.extend_from_slice(&checksum(payload));
    encode(&bytes)
}

/// Base58Check解码：校验并剥离4字节校验和，返回payload
pub fn decode_check(encoded: &str) -> SignerResult<Vec<u8>> {
    let bytes = decode(encoded)?;
    if bytes.len() < CHECKSUM_LEN {
        return Err(SignerError::InvalidInput(format!(
            "base58check payload too short: {} bytes",
            bytes.len()
        )));
    }

    let (payload, expected) = bytes.split_at(bytes.len() - CHECKSUM_LEN);
    if checksum(payload) != expected {
        return Err(SignerError::ChecksumMismatch);
    }

    Ok(payload.to_vec())
}

/// double-SHA-256 的前4字节
fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let first = Sha256::digest(payload);
    let second = Sha256::digest(first);
    let mut result = [0u8; CHECKSUM_LEN];
    result.copy_from_slice(&second[..CHECKSUM_LEN]);
    result
}
