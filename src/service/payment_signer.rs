//! 支付签名服务
//!
//! 端到端编排：链配置查找 → 金额单位转换 → TRON地址归一化 →
//! EIP-712摘要 → secp256k1规范签名。整条链路是纯计算，
//! 唯一的失败模式是输入非法，没有可重试的瞬态错误。

use crate::crypto::{address, eip712, keys};
use crate::domain::chain_config::{self, ChainKind, ChainRegistry};
use crate::domain::payment::{PaymentParams, Signature};
use crate::error::{SignerError, SignerResult};
use crate::utils::{time_utils, units};

/// 默认签名有效期（秒）
const DEFAULT_DEADLINE_SECS: u64 = 1800;

/// 未知链的decimals兜底值
///
/// 注意：与 `sign_payment` 对未知链的硬错误不一致，此行为沿袭宿主
/// 既有接口约定，调用方可能已依赖该默认值。
const FALLBACK_DECIMALS: u32 = 18;

/// 支付签名服务
pub struct PaymentSigner {
    registry: ChainRegistry,
}

impl PaymentSigner {
    /// 创建服务实例
    pub fn new() -> Self {
        Self {
            registry: ChainRegistry::new(),
        }
    }

    /// 签名支付请求
    ///
    /// # 流程
    /// 1. 查链配置（未知链直接失败，不做任何后续计算）
    /// 2. 金额转最小单位
    /// 3. TRON链先把合约/代币地址转换为EVM形式（EIP-712只处理EVM地址）
    /// 4. 域分隔符 + 结构哈希 + 类型化数据摘要
    /// 5. 规范(low-s)可恢复ECDSA签名，v = recoveryId + 27（legacy编码）
    ///
    /// 返回 0x ‖ r ‖ s ‖ v 共132字符的hex字符串。
    pub fn sign_payment(&self, params: &PaymentParams) -> SignerResult<String> {
        let config = self
            .registry
            .get(params.chain_id)
            .copied()
            .ok_or(SignerError::UnsupportedChain(params.chain_id))?;

        // 金额与截止时间先行校验，哈希开始后不允许再失败于数值解析
        let amount_smallest = units::to_smallest_unit(&params.amount, config.decimals)?;
        units::validate_integer_string(&params.deadline)?;

        // EIP-712始终基于EVM形式地址，与签名最终在哪条链使用无关
        let (contract_address, token_address) = match config.kind {
            ChainKind::Tron => (
                address::tron_to_evm_address(&params.contract_address)?,
                address::tron_to_evm_address(&params.token_address)?,
            ),
            ChainKind::Evm => (
                params.contract_address.clone(),
                params.token_address.clone(),
            ),
        };

        let domain_separator = eip712::domain_separator(params.chain_id, &contract_address)?;
        let struct_hash = eip712::payment_struct_hash(
            &params.project_id,
            &token_address,
            &amount_smallest,
            &params.serial_no,
            &params.deadline,
        )?;
        let digest = eip712::typed_data_hash(&domain_separator, &struct_hash);

        tracing::debug!(
            chain_id = params.chain_id,
            serial_no = %params.serial_no,
            "computed typed data digest"
        );

        let signature = Self::sign_digest(&digest, &params.private_key)?;
        Ok(signature.to_hex())
    }

    /// 对32字节摘要做规范可恢复签名
    fn sign_digest(digest: &[u8; 32], private_key: &str) -> SignerResult<Signature> {
        let signing_key = keys::signing_key_from_hex(private_key)?;

        // RFC 6979确定性nonce，s已规范化为low-s
        let (sig, recovery_id) = signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|e| SignerError::InvalidInput(format!("signing failed: {e}")))?;

        let sig_bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&sig_bytes[..32]);
        s.copy_from_slice(&sig_bytes[32..]);

        Ok(Signature::new(r, s, recovery_id.to_byte() + 27))
    }
}

impl Default for PaymentSigner {
    fn default() -> Self {
        Self::new()
    }
}

/// 获取截止时间戳：当前时间 + duration_seconds，十进制字符串
pub fn get_deadline(duration_seconds: u64) -> String {
    time_utils::deadline_from(time_utils::current_timestamp(), duration_seconds)
}

/// 默认有效期（30分钟）的截止时间戳
pub fn get_default_deadline() -> String {
    get_deadline(DEFAULT_DEADLINE_SECS)
}

/// 判断链ID是否为TRON链
pub fn is_tron_chain(chain_id: u64) -> bool {
    matches!(
        chain_config::global().get(chain_id),
        Some(config) if config.kind == ChainKind::Tron
    )
}

/// 获取链的代币精度，未知链返回18
pub fn get_decimals(chain_id: u64) -> u32 {
    chain_config::global()
        .get(chain_id)
        .map(|config| config.decimals)
        .unwrap_or(FALLBACK_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hardhat 默认测试账户#0，公开已知，仅用于测试
    const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn bsc_params() -> PaymentParams {
        PaymentParams {
            chain_id: 56,
            project_id: "test-project".to_string(),
            contract_address: "0x1234567890123456789012345678901234567890".to_string(),
            token_address: "0x55d398326f99059fF775485246999027B3197955".to_string(),
            amount: "10".to_string(),
            serial_no: "PTF-12345".to_string(),
            deadline: "1704067200".to_string(),
            private_key: TEST_PRIVATE_KEY.to_string(),
        }
    }

    #[test]
    fn test_sign_payment_shape() {
        let signature = PaymentSigner::new().sign_payment(&bsc_params()).unwrap();

        assert!(signature.starts_with("0x"));
        assert_eq!(signature.len(), 132);
        assert!(signature[2..].bytes().all(|b| b.is_ascii_hexdigit()));
        // v 必须是legacy 27/28
        assert!(matches!(&signature[130..], "1b" | "1c"));
    }

    #[test]
    fn test_sign_payment_deterministic() {
        let signer = PaymentSigner::new();
        let params = bsc_params();
        assert_eq!(
            signer.sign_payment(&params).unwrap(),
            signer.sign_payment(&params).unwrap()
        );
    }

    #[test]
    fn test_sign_payment_amount_sensitivity() {
        let signer = PaymentSigner::new();
        let mut params = bsc_params();
        let sig_10 = signer.sign_payment(&params).unwrap();
        params.amount = "20".to_string();
        let sig_20 = signer.sign_payment(&params).unwrap();
        assert_ne!(sig_10, sig_20);
    }

    #[test]
    fn test_sign_payment_decimal_amount() {
        let mut params = bsc_params();
        params.amount = "10.5".to_string();
        let signature = PaymentSigner::new().sign_payment(&params).unwrap();
        assert_eq!(signature.len(), 132);
    }

    #[test]
    fn test_sign_payment_tron_chain() {
        let params = PaymentParams {
            chain_id: 728126428,
            project_id: "test-project".to_string(),
            contract_address: "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".to_string(),
            token_address: "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".to_string(),
            amount: "10".to_string(),
            serial_no: "PTF-12345".to_string(),
            deadline: "1704067200".to_string(),
            private_key: TEST_PRIVATE_KEY.to_string(),
        };

        let signature = PaymentSigner::new().sign_payment(&params).unwrap();
        assert!(signature.starts_with("0x"));
        assert_eq!(signature.len(), 132);
    }

    #[test]
    fn test_sign_payment_unsupported_chain() {
        let mut params = bsc_params();
        params.chain_id = 999999;
        assert_eq!(
            PaymentSigner::new().sign_payment(&params),
            Err(SignerError::UnsupportedChain(999999))
        );
    }

    #[test]
    fn test_sign_payment_rejects_bad_amount() {
        let signer = PaymentSigner::new();
        for bad in ["", ".", "-1", "1.2.3", "ten"] {
            let mut params = bsc_params();
            params.amount = bad.to_string();
            assert!(matches!(
                signer.sign_payment(&params),
                Err(SignerError::Arithmetic(_))
            ));
        }
    }

    #[test]
    fn test_sign_payment_rejects_bad_deadline() {
        let mut params = bsc_params();
        params.deadline = "tomorrow".to_string();
        assert!(matches!(
            PaymentSigner::new().sign_payment(&params),
            Err(SignerError::Arithmetic(_))
        ));
    }

    #[test]
    fn test_sign_payment_rejects_bad_private_key() {
        let mut params = bsc_params();
        params.private_key = "deadbeef".to_string();
        assert_eq!(
            PaymentSigner::new().sign_payment(&params),
            Err(SignerError::InvalidPrivateKey)
        );
    }

    #[test]
    fn test_get_deadline_window() {
        let deadline: i64 = get_deadline(1800).parse().unwrap();
        let now = time_utils::current_timestamp();
        assert!(deadline > now);
        assert!(deadline <= now + 1801);
    }

    #[test]
    fn test_get_default_deadline() {
        let deadline: i64 = get_default_deadline().parse().unwrap();
        assert!(deadline > time_utils::current_timestamp());
    }

    #[test]
    fn test_is_tron_chain() {
        assert!(is_tron_chain(728126428));
        assert!(is_tron_chain(3448148188));
        assert!(!is_tron_chain(56));
        assert!(!is_tron_chain(999999));
    }

    #[test]
    fn test_get_decimals() {
        assert_eq!(get_decimals(56), 18);
        assert_eq!(get_decimals(97), 18);
        assert_eq!(get_decimals(728126428), 6);
        // 未知链兜底18，与sign_payment的硬错误行为不同
        assert_eq!(get_decimals(999999), 18);
    }
}
