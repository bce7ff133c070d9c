//! 大整数转换模块
//!
//! 十进制字符串与十六进制字符串之间的精确转换。
//! 金额与256位哈希字段都会超出u64范围，所以全部走num-bigint，
//! 不允许任何定宽整数或浮点中间表示。

use num_bigint::BigUint;
use num_traits::Num;

use crate::error::{SignerError, SignerResult};

/// 十进制字符串转十六进制字符串（小写，无前缀，无填充）
///
/// 空串与 "0" 都返回 "0"。负号或非数字字符返回错误。
pub fn decimal_to_hex(value: &str) -> SignerResult<String> {
    if value.is_empty() || value == "0" {
        return Ok("0".to_string());
    }

    let num = parse_decimal(value)?;
    Ok(num.to_str_radix(16))
}

/// 十六进制字符串转十进制字符串
///
/// 接受可选的 0x/0X 前缀。"0"/"00" 返回 "0"。
pub fn hex_to_decimal(hex: &str) -> SignerResult<String> {
    let hex = strip_hex_prefix(hex);
    if hex.is_empty() {
        return Ok("0".to_string());
    }

    let num = BigUint::from_str_radix(hex, 16)
        .map_err(|_| SignerError::InvalidInput(format!("invalid hex string: {hex}")))?;
    Ok(num.to_str_radix(10))
}

/// 左填充十六进制字符串到64个字符（32字节）
///
/// 超过64个字符视为编码错误而非截断。
pub fn hex_pad32(hex: &str) -> SignerResult<String> {
    if hex.len() > 64 {
        return Err(SignerError::InvalidInput(format!(
            "hex value exceeds 32 bytes: {} chars",
            hex.len()
        )));
    }
    Ok(format!("{hex:0>64}"))
}

/// 解析非负十进制字符串
pub(crate) fn parse_decimal(value: &str) -> SignerResult<BigUint> {
    if value.is_empty() {
        return Err(SignerError::Arithmetic("empty numeric string".to_string()));
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SignerError::Arithmetic(format!(
            "not a non-negative integer: {value}"
        )));
    }

    // 字符已校验为纯数字，解析不会失败
    BigUint::from_str_radix(value, 10)
        .map_err(|_| SignerError::Arithmetic(format!("not a non-negative integer: {value}")))
}

/// 校验字符串是非负十进制整数
pub fn is_decimal(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn strip_hex_prefix(hex: &str) -> &str {
    hex.strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex)
}
