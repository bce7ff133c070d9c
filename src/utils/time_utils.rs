//! 时间工具模块
//! 提供时间处理相关的工具函数

use chrono::Utc;

/// 获取当前时间戳（秒）
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// 基准时间戳加偏移量，返回十进制字符串
pub fn deadline_from(base_secs: i64, duration_seconds: u64) -> String {
    (base_secs + duration_seconds as i64).to_string()
}
