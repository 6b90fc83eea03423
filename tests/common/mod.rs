#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Each test crate only uses a subset of these helpers"
)]

use alloy::hex;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::sol_types::abi::TokenSeq;
use alloy::sol_types::{SolType, SolValue};
use httpmock::Method::POST;
use httpmock::{Mock, MockServer};
use serde_json::{Value, json};
use sybex_client_sdk::types::{Address, TxHash, address, b256};

/// `eth_chainId` result for BNB Smart Chain
pub const BSC_CHAIN_ID: &str = "0x38";

pub const ACCOUNT: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

pub const TX_HASH: TxHash =
    b256!("0x8e9f1b6a6f6c3f2b7a1c55d0b3b3e4f2d8e1a9c6b2f4d7e0a3c5b8d1e4f7a2c5");

/// Provider without fillers, so a write is a single `eth_sendTransaction`.
pub async fn provider(server: &MockServer) -> anyhow::Result<impl Provider + Clone> {
    Ok(ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect(&server.base_url())
        .await?)
}

/// Stubs one JSON-RPC method with a successful `result`.
pub fn rpc<'a>(server: &'a MockServer, method: &str, result: Value) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .body_includes(format!("\"method\":\"{method}\""));
        then.status(200).json_body(json!({
            "jsonrpc": "2.0",
            "id": 0,
            "result": result
        }));
    })
}

/// Stubs one JSON-RPC method with an error response.
pub fn rpc_error<'a>(server: &'a MockServer, method: &str, message: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .body_includes(format!("\"method\":\"{method}\""));
        then.status(200).json_body(json!({
            "jsonrpc": "2.0",
            "id": 0,
            "error": { "code": -32000, "message": message }
        }));
    })
}

pub fn chain_id<'a>(server: &'a MockServer, chain_id: &str) -> Mock<'a> {
    rpc(server, "eth_chainId", json!(chain_id))
}

/// Stubs `eth_call` with the ABI encoding of `returns`, which must be a tuple matching the
/// function's outputs.
pub fn eth_call<T: SolValue>(server: &MockServer, returns: T) -> Mock<'_>
where
    for<'a> <T::SolType as SolType>::Token<'a>: TokenSeq<'a>,
{
    rpc(
        server,
        "eth_call",
        json!(hex::encode_prefixed(returns.abi_encode_params())),
    )
}

pub fn send_transaction(server: &MockServer) -> Mock<'_> {
    rpc(server, "eth_sendTransaction", json!(TX_HASH))
}

/// Mined receipt for [`TX_HASH`] in block `0x10`.
#[must_use]
pub fn receipt() -> Value {
    json!({
        "transactionHash": TX_HASH,
        "transactionIndex": "0x0",
        "blockHash": "0x2c1b9a5f4e3d7c6b8a9f0e1d2c3b4a5f6e7d8c9b0a1f2e3d4c5b6a7f8e9d0c1b",
        "blockNumber": "0x10",
        "from": ACCOUNT,
        "to": "0x5a9b54ce65cca0a18177a19b712a5d51a08e88bc",
        "cumulativeGasUsed": "0x5208",
        "gasUsed": "0x5208",
        "effectiveGasPrice": "0x3b9aca00",
        "contractAddress": null,
        "logs": [],
        "logsBloom": format!("0x{}", "0".repeat(512)),
        "status": "0x1",
        "type": "0x2"
    })
}
