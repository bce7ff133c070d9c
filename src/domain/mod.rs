//! Domain 模块
//!
//! 链配置表与支付请求领域模型

pub mod chain_config;
pub mod payment;

// 重新导出常用类型
pub use chain_config::{ChainConfig, ChainKind, ChainRegistry};
pub use payment::{PaymentParams, Signature};
