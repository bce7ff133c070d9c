pub mod bigint;
pub mod time_utils;
pub mod units;

// Re-export commonly used functions
pub use time_utils::*;
pub use units::to_smallest_unit;
