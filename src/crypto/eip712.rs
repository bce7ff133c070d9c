//! EIP-712 类型化数据哈希
//!
//! 为支付请求构造EIP-712域分隔符、结构哈希与最终签名摘要。
//! 结构类型字符串必须与验证合约逐字节一致，任何字段顺序或填充差异
//! 都会导致链上验签失败。
//!
//! 参考: <https://eips.ethereum.org/EIPS/eip-712>

use crate::crypto::keccak::{keccak256, pad_address, pad_u256};
use crate::error::{SignerError, SignerResult};
use crate::utils::bigint;

/// 域名称
const DOMAIN_NAME: &str = "PayTheFlyPro";

/// 域版本
const DOMAIN_VERSION: &str = "1";

/// EIP712Domain 类型哈希（固定常量）
///
/// keccak256("EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)")
const DOMAIN_TYPE_HASH: &str = "8b73c3c69bb8fe3d512ecc4cf759cc79239f7b179b0ffacaa9a75d522b39400f";

/// PaymentRequest 结构类型字符串
///
/// 类型哈希在每次调用时从该字面量计算，与域类型哈希的固定常量形成对照。
const PAYMENT_REQUEST_TYPE: &str =
    "PaymentRequest(string projectId,address token,uint256 amount,string serialNo,uint256 deadline)";

/// 计算域分隔符
///
/// keccak256(domainTypeHash ‖ keccak256(name) ‖ keccak256(version)
///           ‖ uint256(chainId) ‖ address左填充32字节)
pub fn domain_separator(chain_id: u64, contract_address: &str) -> SignerResult<[u8; 32]> {
    let mut encoded = Vec::with_capacity(5 * 32);
    encoded.extend_from_slice(&domain_type_hash());
    encoded.extend_from_slice(&keccak256(DOMAIN_NAME.as_bytes()));
    encoded.extend_from_slice(&keccak256(DOMAIN_VERSION.as_bytes()));
    encoded.extend_from_slice(&pad_u256(chain_id));
    encoded.extend_from_slice(&encode_address(contract_address)?);
    debug_assert_eq!(encoded.len(), 5 * 32);

    Ok(keccak256(&encoded))
}

/// 计算 PaymentRequest 结构哈希
///
/// 动态长度字段（projectId、serialNo）按EIP-712规则先哈希再拼接，
/// 金额与截止时间是十进制字符串，编码为uint256。
pub fn payment_struct_hash(
    project_id: &str,
    token_address: &str,
    amount: &str,
    serial_no: &str,
    deadline: &str,
) -> SignerResult<[u8; 32]> {
    let mut encoded = Vec::with_capacity(6 * 32);
    encoded.extend_from_slice(&payment_type_hash());
    encoded.extend_from_slice(&keccak256(project_id.as_bytes()));
    encoded.extend_from_slice(&encode_address(token_address)?);
    encoded.extend_from_slice(&encode_uint256(amount)?);
    encoded.extend_from_slice(&keccak256(serial_no.as_bytes()));
    encoded.extend_from_slice(&encode_uint256(deadline)?);
    debug_assert_eq!(encoded.len(), 6 * 32);

    Ok(keccak256(&encoded))
}

/// 计算最终签名摘要
///
/// keccak256(0x1901 ‖ domainSeparator ‖ structHash)
pub fn typed_data_hash(domain_separator: &[u8; 32], struct_hash: &[u8; 32]) -> [u8; 32] {
    let mut data = Vec::with_capacity(2 + 32 + 32);
    data.push(0x19);
    data.push(0x01);
    data.extend_from_slice(domain_separator);
    data.extend_from_slice(struct_hash);

    keccak256(&data)
}

/// PaymentRequest 类型哈希（调用时计算）
pub fn payment_type_hash() -> [u8; 32] {
    keccak256(PAYMENT_REQUEST_TYPE.as_bytes())
}

/// EIP712Domain 类型哈希（固定常量解码）
fn domain_type_hash() -> [u8; 32] {
    let mut result = [0u8; 32];
    // 常量为合法hex，解码不会失败
    let bytes = hex::decode(DOMAIN_TYPE_HASH).expect("domain type hash constant is valid hex");
    result.copy_from_slice(&bytes);
    result
}

/// 地址编码为32字节：剥离0x前缀、转小写、左填充
fn encode_address(address: &str) -> SignerResult<[u8; 32]> {
    let hex_part = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address)
        .to_lowercase();

    if hex_part.len() != 40 || !hex_part.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SignerError::InvalidInput(format!(
            "invalid EVM address: {address}"
        )));
    }

    let bytes = hex::decode(&hex_part)
        .map_err(|_| SignerError::InvalidInput(format!("invalid EVM address: {address}")))?;
    let mut payload = [0u8; 20];
    payload.copy_from_slice(&bytes);
    Ok(pad_address(&payload))
}

/// 十进制字符串编码为32字节uint256
fn encode_uint256(value: &str) -> SignerResult<[u8; 32]> {
    let hex_value = bigint::decimal_to_hex(value)?;
    let padded = bigint::hex_pad32(&hex_value).map_err(|_| {
        SignerError::Arithmetic(format!("value exceeds uint256 range: {value}"))
    })?;

    let bytes = hex::decode(&padded)
        .map_err(|_| SignerError::Arithmetic(format!("value exceeds uint256 range: {value}")))?;
    let mut result = [0u8; 32];
    result.copy_from_slice(&bytes);
    Ok(result)
}
