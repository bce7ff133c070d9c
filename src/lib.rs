//! PayTheFly Core - 支付签名核心库
//!
//! 为EVM与TRON链生成EIP-712类型化数据签名，并从secp256k1私钥
//! 派生/校验两种链的地址。纯计算库：无网络、无持久化、无共享可变状态，
//! 可安全并发调用。密钥存储与传输由宿主应用负责。

pub mod crypto;
pub mod domain;
pub mod error;
pub mod service;
pub mod utils;

// 重新导出常用类型
pub use error::{SignerError, SignerResult};
pub use service::PaymentSigner;

// 统一模块导出
pub mod prelude {
    pub use crate::{
        crypto::{
            derive_evm_address, derive_tron_address, evm_to_tron_address, generate_private_key,
            tron_to_evm_address, validate_private_key,
        },
        domain::{ChainConfig, ChainKind, ChainRegistry, PaymentParams, Signature},
        error::{SignerError, SignerResult},
        service::{get_deadline, get_decimals, is_tron_chain, PaymentSigner},
    };
}
