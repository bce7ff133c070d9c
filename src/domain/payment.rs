//! 支付请求领域模型
//!
//! 签名请求参数与ECDSA签名值类型。所有类型都是按次构造的值类型，
//! 调用之间不保留任何状态。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 支付签名请求参数
///
/// 地址字段按链类型给定：TRON链传入 T 开头的Base58Check地址，
/// EVM链传入 0x 开头的hex地址。`amount` 是人类可读的十进制字符串，
/// `deadline` 是十进制unix时间戳字符串。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentParams {
    /// 链 ID
    pub chain_id: u64,
    /// 项目 ID
    pub project_id: String,
    /// 验证合约地址
    pub contract_address: String,
    /// 代币合约地址
    pub token_address: String,
    /// 支付金额（十进制字符串，如 "10.5"）
    pub amount: String,
    /// 订单序列号
    pub serial_no: String,
    /// 截止时间戳（十进制字符串）
    pub deadline: String,
    /// 签名私钥（64位hex，可带0x前缀）
    pub private_key: String,
}

/// ECDSA 签名 (r, s, v)
///
/// `v` 为legacy恢复字节（27/28），非EIP-155编码。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub r: [u8; 32],
    pub s: [u8; 32],
    pub v: u8,
}

impl Signature {
    pub fn new(r: [u8; 32], s: [u8; 32], v: u8) -> Self {
        Self { r, s, v }
    }

    /// 编码为 0x ‖ r ‖ s ‖ v 的小写hex字符串（132字符）
    pub fn to_hex(&self) -> String {
        format!("0x{}{}{:02x}", hex::encode(self.r), hex::encode(self.s), self.v)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
