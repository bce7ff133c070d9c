//! 开发工具：生成测试密钥与地址
//!
//! 仅用于测试环境验证地址派生；生产私钥不应由此工具产生或打印。

use anyhow::{Context, Result};
use paythefly_core::crypto::{
    derive_evm_address, derive_tron_address, generate_private_key, tron_to_evm_address,
    validate_private_key,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let private_key = generate_private_key();
    if !validate_private_key(&private_key) {
        anyhow::bail!("generated key failed validation");
    }

    let evm_address = derive_evm_address(&private_key).context("Failed to derive EVM address")?;
    let tron_address =
        derive_tron_address(&private_key).context("Failed to derive TRON address")?;

    // 互转自检
    let roundtrip = tron_to_evm_address(&tron_address).context("Failed to convert back")?;
    if roundtrip.to_lowercase() != evm_address.to_lowercase() {
        anyhow::bail!("address roundtrip mismatch: {roundtrip} != {evm_address}");
    }

    println!("private key : {private_key}");
    println!("evm address : {evm_address}");
    println!("tron address: {tron_address}");

    Ok(())
}
