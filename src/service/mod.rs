//! Service 模块
//!
//! 面向宿主应用的签名编排层

pub mod payment_signer;

pub use payment_signer::{
    get_deadline, get_decimals, get_default_deadline, is_tron_chain, PaymentSigner,
};
