#![allow(clippy::exhaustive_enums, reason = "Fine for examples")]
#![allow(clippy::exhaustive_structs, reason = "Fine for examples")]

//! Sybex AMM example.
//!
//! Lists the most recent markets with their outcome pools, and optionally places a small BNB
//! position on the first outcome of the latest active market.
//!
//! ## Usage
//!
//! Read-only:
//! ```sh
//! cargo run --example amm --features tracing
//! ```
//!
//! Placing a position needs a funded BSC account:
//! ```sh
//! export SYBEX_PRIVATE_KEY="your_private_key"
//! cargo run --example amm --features tracing -- --write
//! ```

use std::env;
use std::str::FromStr as _;

use alloy::providers::ProviderBuilder;
use alloy::signers::Signer as _;
use alloy::signers::local::LocalSigner;
use anyhow::Result;
use sybex_client_sdk::amm::Client;
use sybex_client_sdk::amm::types::{MarketStatus, OutcomeRequest, PlacePositionRequest};
use sybex_client_sdk::dispatch::Wait;
use sybex_client_sdk::types::U256;
use sybex_client_sdk::{BSC, PRIVATE_KEY_VAR, RPC_URL_VAR, chain};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const MARKETS_SHOWN: u64 = 5;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let write_mode = env::args().any(|arg| arg == "--write");

    let bsc = chain(BSC)?;
    let rpc_url = env::var(RPC_URL_VAR).unwrap_or_else(|_| bsc.default_rpc_url.to_owned());

    info!("=== Sybex AMM Example ===");

    let provider = ProviderBuilder::new().connect(&rpc_url).await?;
    let client = Client::new(provider);

    info!("Oracle: {}", client.oracle().await?);
    info!("Fee percentage: {}", client.fee_percentage().await?);

    let counter = client.market_counter().await?;
    info!("Markets created: {counter}");

    let mut latest_active = None;
    let first = counter.saturating_sub(U256::from(MARKETS_SHOWN));
    let mut market_id = counter;
    while market_id > first {
        market_id -= U256::from(1);

        let market = client.market(market_id).await?;
        info!(
            "#{market_id} [{}] {} (pool {}, deadline {:?})",
            market.status,
            market.question,
            market.total_pool,
            market.deadline_at()
        );

        let mut outcome_id = U256::ZERO;
        loop {
            let outcome = OutcomeRequest::builder()
                .market_id(market_id)
                .outcome_id(outcome_id)
                .build();
            let Ok(label) = client.outcome_label(&outcome).await else {
                break;
            };
            if label.is_empty() {
                break;
            }
            info!("  {outcome_id}: {label} ({})", client.outcome_pool(&outcome).await?);
            outcome_id += U256::from(1);
        }

        if latest_active.is_none() && market.status == MarketStatus::Active && market.is_native() {
            latest_active = Some(market_id);
        }
    }

    if write_mode {
        let Some(market_id) = latest_active else {
            info!("No active BNB market to place a position on");
            return Ok(());
        };

        let private_key =
            env::var(PRIVATE_KEY_VAR).expect("Need a private key for write operations");
        let signer = LocalSigner::from_str(&private_key)?.with_chain_id(Some(BSC));

        let provider = ProviderBuilder::new()
            .wallet(signer)
            .connect(&rpc_url)
            .await?;
        let client = Client::from_wallet(provider);

        let request = PlacePositionRequest::builder()
            .market_id(market_id)
            .outcome_id(U256::ZERO)
            .value(U256::from(10_u64).pow(U256::from(15_u64)))
            .wait(Wait::included())
            .build();

        match client.place_position(&request).await {
            Ok(submission) => {
                info!("✓ Position placed in {}", submission.transaction_hash());
                info!("  Block number: {:?}", submission.block_number());
            }
            Err(e) => error!("✗ Place position failed: {e}"),
        }
    }

    Ok(())
}
