//! 错误类型模块
//!
//! 签名核心的统一错误类型；每个公开操作要么返回完整结果，要么返回其中一个变体

use thiserror::Error;

/// 签名核心错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignerError {
    /// 输入格式错误（非法hex、非法Base58、地址长度错误等）
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// 链ID不在配置表中
    #[error("unsupported chain ID: {0}")]
    UnsupportedChain(u64),

    /// 私钥格式或取值非法
    #[error("invalid private key")]
    InvalidPrivateKey,

    /// 数值字符串非法（负数、非数字、空串）
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// Base58Check校验和不匹配
    #[error("base58 checksum mismatch")]
    ChecksumMismatch,
}

/// 统一Result别名
pub type SignerResult<T> = Result<T, SignerError>;
