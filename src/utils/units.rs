//! 金额单位转换模块
//!
//! 人类可读的十进制金额转换为链上最小单位的整数字符串。
//! 全程字符串运算：超出decimals位数的小数部分直接截断，永不四舍五入，
//! 否则签名金额会与链上校验值不一致。

use crate::error::{SignerError, SignerResult};
use crate::utils::bigint;

/// 十进制金额字符串转最小单位整数字符串
///
/// - `"1"`, 18 -> `"1000000000000000000"`
/// - `"1.123456789"`, 6 -> `"1123456"`（第7位之后截断）
/// - `"0"` / `"0.00"` -> `"0"`
///
/// 小数部分不足decimals位时右补零，超出时截断。
pub fn to_smallest_unit(amount: &str, decimals: u32) -> SignerResult<String> {
    let decimals = decimals as usize;

    let (integer, fraction) = match amount.find('.') {
        None => (amount, ""),
        Some(_) => {
            let mut parts = amount.splitn(2, '.');
            let integer = parts.next().unwrap_or("");
            let fraction = parts.next().unwrap_or("");
            if fraction.contains('.') {
                return Err(SignerError::Arithmetic(format!(
                    "malformed decimal amount: {amount}"
                )));
            }
            (integer, fraction)
        }
    };

    if integer.is_empty() && fraction.is_empty() {
        return Err(SignerError::Arithmetic(format!(
            "amount has no digits: {amount:?}"
        )));
    }
    if !integer.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(SignerError::Arithmetic(format!(
            "not a non-negative decimal amount: {amount}"
        )));
    }

    // 补齐或截断小数部分到decimals位
    let mut fraction = fraction.to_string();
    if fraction.len() < decimals {
        fraction.push_str(&"0".repeat(decimals - fraction.len()));
    } else {
        fraction.truncate(decimals);
    }

    // 拼接后去掉前导零，全零结果归一为 "0"
    let combined = format!("{integer}{fraction}");
    let trimmed = combined.trim_start_matches('0');
    if trimmed.is_empty() {
        return Ok("0".to_string());
    }

    Ok(trimmed.to_string())
}

/// 最小单位字符串校验（签名前的fail-fast检查）
pub fn validate_integer_string(value: &str) -> SignerResult<()> {
    if bigint::is_decimal(value) {
        Ok(())
    } else {
        Err(SignerError::Arithmetic(format!(
            "not a non-negative integer: {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_amount() {
        assert_eq!(to_smallest_unit("1", 18).unwrap(), "1000000000000000000");
        assert_eq!(to_smallest_unit("5", 18).unwrap(), "5000000000000000000");
        assert_eq!(to_smallest_unit("10", 6).unwrap(), "10000000");
    }

    #[test]
    fn test_fractional_amount() {
        assert_eq!(to_smallest_unit("1.5", 6).unwrap(), "1500000");
        assert_eq!(to_smallest_unit("10.5", 18).unwrap(), "10500000000000000000");
        assert_eq!(to_smallest_unit("0.000001", 6).unwrap(), "1");
    }

    #[test]
    fn test_truncation_not_rounding() {
        // 第9位是9，四舍五入会得到1123457，截断必须得到1123456
        assert_eq!(to_smallest_unit("1.123456789", 6).unwrap(), "1123456");
        assert_eq!(to_smallest_unit("0.9999999", 6).unwrap(), "999999");
    }

    #[test]
    fn test_zero_amounts() {
        assert_eq!(to_smallest_unit("0", 18).unwrap(), "0");
        assert_eq!(to_smallest_unit("0.00", 6).unwrap(), "0");
        assert_eq!(to_smallest_unit("0.0000000", 6).unwrap(), "0");
    }

    #[test]
    fn test_leading_zeros_stripped() {
        assert_eq!(to_smallest_unit("007", 2).unwrap(), "700");
        assert_eq!(to_smallest_unit(".5", 6).unwrap(), "500000");
    }

    #[test]
    fn test_zero_decimals() {
        assert_eq!(to_smallest_unit("42", 0).unwrap(), "42");
        assert_eq!(to_smallest_unit("42.9", 0).unwrap(), "42");
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(to_smallest_unit(".", 6).is_err());
        assert!(to_smallest_unit("", 6).is_err());
        assert!(to_smallest_unit("-1", 6).is_err());
        assert!(to_smallest_unit("1.2.3", 6).is_err());
        assert!(to_smallest_unit("1,5", 6).is_err());
    }
}
