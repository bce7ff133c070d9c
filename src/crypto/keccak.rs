//! Keccak-256 哈希工具
//!
//! EIP-712结构哈希和地址派生使用的哈希原语。
//! 输入为原始字节，输出固定32字节，除Keccak自身的padding外不做任何填充。

use sha3::{Digest, Keccak256};

/// 计算数据的Keccak-256哈希
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// 计算Keccak-256哈希并返回小写hex字符串（无前缀）
pub fn keccak256_hex(data: &[u8]) -> String {
    hex::encode(keccak256(data))
}

/// u64整数左填充为32字节big-endian
pub fn pad_u256(value: u64) -> [u8; 32] {
    let mut result = [0u8; 32];
    result[24..].copy_from_slice(&value.to_be_bytes());
    result
}

/// 20字节地址左填充为32字节
pub fn pad_address(address: &[u8; 20]) -> [u8; 32] {
    let mut result = [0u8; 32];
    result[12..].copy_from_slice(address);
    result
}
