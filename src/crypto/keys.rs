//! secp256k1 私钥模块
//!
//! 私钥生成、格式校验与解析。私钥的规范表示为64位小写hex字符串（无前缀）；
//! 输入侧统一剥离可选的 0x/0X 前缀。
//! 存储与加密策略由宿主负责，本模块不落盘任何密钥材料。

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use crate::error::{SignerError, SignerResult};

/// 生成新的随机私钥
///
/// 使用操作系统CSPRNG，返回64位小写hex字符串（无0x前缀）。
pub fn generate_private_key() -> String {
    let signing_key = SigningKey::random(&mut OsRng);
    let mut key_bytes: [u8; 32] = signing_key.to_bytes().into();
    let encoded = hex::encode(&key_bytes);
    key_bytes.zeroize();
    encoded
}

/// 校验私钥格式
///
/// 纯谓词：剥离可选前缀后必须是恰好64个hex字符。
/// 不在构造时强制——调用方可以持有未校验的字符串直到真正使用。
pub fn validate_private_key(key: &str) -> bool {
    let hex = normalize_hex(key);
    hex.len() == 64 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

/// 剥离可选的 0x/0X 前缀
pub(crate) fn normalize_hex(key: &str) -> &str {
    key.strip_prefix("0x")
        .or_else(|| key.strip_prefix("0X"))
        .unwrap_or(key)
}

/// 解析私钥为签名密钥
///
/// 除格式外还会拒绝曲线上非法的标量（零、超出曲线阶）。
pub(crate) fn signing_key_from_hex(key: &str) -> SignerResult<SigningKey> {
    let hex = normalize_hex(key);
    let mut bytes = hex::decode(hex).map_err(|_| SignerError::InvalidPrivateKey)?;
    if bytes.len() != 32 {
        bytes.zeroize();
        return Err(SignerError::InvalidPrivateKey);
    }

    let result = SigningKey::from_slice(&bytes).map_err(|_| SignerError::InvalidPrivateKey);
    bytes.zeroize();
    result
}
