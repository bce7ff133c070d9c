//! 链配置模块
//!
//! 定义所有支持的区块链及其签名相关配置。
//! 配置表是一次构造的只读数据，运行期不允许修改。

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// 链类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainKind {
    /// TRON 系列（地址为Base58Check编码，签名前需转换为EVM形式）
    Tron,
    /// EVM 系列（BSC等，地址为0x hex编码）
    Evm,
}

/// 链配置
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChainConfig {
    /// 链 ID
    pub chain_id: u64,
    /// 链类型
    pub kind: ChainKind,
    /// 代币精度（最小单位的小数位数）
    pub decimals: u32,
}

/// 链配置注册表
pub struct ChainRegistry {
    configs: HashMap<u64, ChainConfig>,
}

impl ChainRegistry {
    /// 创建预配置的注册表
    pub fn new() -> Self {
        let mut registry = Self {
            configs: HashMap::new(),
        };

        registry.register_default_chains();
        registry
    }

    /// 注册支持的链
    fn register_default_chains(&mut self) {
        // TRON Mainnet
        self.register(ChainConfig {
            chain_id: 728126428,
            kind: ChainKind::Tron,
            decimals: 6,
        });

        // TRON Shasta Testnet
        self.register(ChainConfig {
            chain_id: 3448148188,
            kind: ChainKind::Tron,
            decimals: 6,
        });

        // BSC Mainnet
        self.register(ChainConfig {
            chain_id: 56,
            kind: ChainKind::Evm,
            decimals: 18,
        });

        // BSC Testnet
        self.register(ChainConfig {
            chain_id: 97,
            kind: ChainKind::Evm,
            decimals: 18,
        });
    }

    /// 注册链配置
    fn register(&mut self, config: ChainConfig) {
        self.configs.insert(config.chain_id, config);
    }

    /// 通过 chain_id 获取配置
    pub fn get(&self, chain_id: u64) -> Option<&ChainConfig> {
        self.configs.get(&chain_id)
    }

    /// 列出所有支持的链
    pub fn list_all(&self) -> Vec<&ChainConfig> {
        self.configs.values().collect()
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// 全局只读注册表
static REGISTRY: Lazy<ChainRegistry> = Lazy::new(ChainRegistry::new);

/// 获取全局注册表
pub fn global() -> &'static ChainRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_registry() {
        let registry = ChainRegistry::new();

        let bsc = registry.get(56).unwrap();
        assert_eq!(bsc.kind, ChainKind::Evm);
        assert_eq!(bsc.decimals, 18);

        let tron = registry.get(728126428).unwrap();
        assert_eq!(tron.kind, ChainKind::Tron);
        assert_eq!(tron.decimals, 6);
    }

    #[test]
    fn test_unknown_chain_is_none() {
        let registry = ChainRegistry::new();
        assert!(registry.get(999999).is_none());
        assert!(registry.get(1).is_none()); // Ethereum主网不在支持列表
    }

    #[test]
    fn test_fixed_table_size() {
        assert_eq!(ChainRegistry::new().list_all().len(), 4);
    }

    #[test]
    fn test_global_registry() {
        assert!(global().get(97).is_some());
        assert!(global().get(3448148188).is_some());
    }
}
