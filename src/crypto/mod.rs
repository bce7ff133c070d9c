//! Crypto 模块
//!
//! 签名核心的密码学原语：Keccak-256、secp256k1密钥、EIP-712哈希、
//! EVM/TRON地址编解码

pub mod address;
pub mod base58;
pub mod eip712;
pub mod keccak;
pub mod keys;

// 重新导出常用函数
pub use address::{
    derive_evm_address, derive_tron_address, evm_to_tron_address, is_valid_address,
    to_checksum_address, tron_to_evm_address,
};
pub use keccak::keccak256;
pub use keys::{generate_private_key, validate_private_key};
