#![allow(clippy::exhaustive_enums, reason = "Fine for examples")]
#![allow(clippy::exhaustive_structs, reason = "Fine for examples")]

//! Sybex resolver example.
//!
//! Checks which resolver contracts the configured account may resolve through, then resolves
//! a boolean question.
//!
//! ## Usage
//!
//! ```sh
//! export SYBEX_PRIVATE_KEY="your_private_key"
//! cargo run --example resolvers --features tracing -- <question_id> <0|1> [proof]
//! ```

use std::env;
use std::str::FromStr as _;

use alloy::providers::ProviderBuilder;
use alloy::signers::Signer as _;
use alloy::signers::local::LocalSigner;
use anyhow::{Context as _, Result};
use sybex_client_sdk::dispatch::Wait;
use sybex_client_sdk::resolvers::Client;
use sybex_client_sdk::resolvers::types::{ResolveBinaryRequest, ResolverKind};
use sybex_client_sdk::types::U256;
use sybex_client_sdk::{BSC, PRIVATE_KEY_VAR, RPC_URL_VAR, chain, oracle};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = env::args().skip(1);
    let question_id = U256::from_str(&args.next().context("missing <question_id>")?)?;
    let outcome = args.next().context("missing <0|1>")?.parse::<i64>()?;
    let proof = args.next().unwrap_or_default();

    let rpc_url = env::var(RPC_URL_VAR).unwrap_or_else(|_| {
        chain(BSC)
            .map(|bsc| bsc.default_rpc_url.to_owned())
            .unwrap_or_default()
    });
    let private_key = env::var(PRIVATE_KEY_VAR).context("Need a private key to resolve")?;
    let signer = LocalSigner::from_str(&private_key)?.with_chain_id(Some(BSC));
    let account = signer.address();

    let provider = ProviderBuilder::new()
        .wallet(signer)
        .connect(&rpc_url)
        .await?;

    info!("=== Sybex Resolver Example ===");
    info!("Resolver account: {account}");

    let oracle = oracle::Client::new(provider.clone());
    let resolver_role = oracle.resolver_role().await?;
    if !oracle.is_resolver(account).await? {
        warn!("{account} is not registered as an oracle resolver");
    }

    let client = Client::from_wallet(provider);
    for kind in ResolverKind::ALL {
        let allowed = client.has_role(kind, resolver_role, account).await?;
        info!("{kind} resolver: {}", if allowed { "allowed" } else { "not allowed" });
    }

    let question = oracle.question(question_id).await?;
    info!("Resolving question #{question_id}: {}", question.question_text);

    let request = ResolveBinaryRequest::builder()
        .question_id(question_id)
        .outcome(outcome)
        .proof(proof)
        .wait(Wait::included())
        .build();

    match client.resolve_binary(&request).await {
        Ok(submission) => {
            info!("✓ Resolved in {}", submission.transaction_hash());
            info!("  Block number: {:?}", submission.block_number());
        }
        Err(e) => error!("✗ Resolve failed: {e}"),
    }

    Ok(())
}
