#![allow(clippy::exhaustive_enums, reason = "Fine for examples")]
#![allow(clippy::exhaustive_structs, reason = "Fine for examples")]

//! Sybex oracle example.
//!
//! Reads the oracle's configuration and a question, and optionally asks a new one.
//!
//! ## Usage
//!
//! Read-only:
//! ```sh
//! cargo run --example oracle --features tracing
//! ```
//!
//! Asking a question needs a funded BSC account:
//! ```sh
//! export SYBEX_PRIVATE_KEY="your_private_key"
//! cargo run --example oracle --features tracing -- --write
//! ```

use std::env;
use std::str::FromStr as _;

use alloy::providers::ProviderBuilder;
use alloy::signers::Signer as _;
use alloy::signers::local::LocalSigner;
use anyhow::Result;
use sybex_client_sdk::dispatch::Wait;
use sybex_client_sdk::oracle::Client;
use sybex_client_sdk::oracle::types::{AskRequest, QuestionType};
use sybex_client_sdk::types::U256;
use sybex_client_sdk::{BSC, ContractName, PRIVATE_KEY_VAR, RPC_URL_VAR, chain, contract_address};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let write_mode = env::args().any(|arg| arg == "--write");

    let bsc = chain(BSC)?;
    let rpc_url = env::var(RPC_URL_VAR).unwrap_or_else(|_| bsc.default_rpc_url.to_owned());

    info!("=== Sybex Oracle Example ===");
    info!("Network: {bsc}");
    info!("Oracle: {}", contract_address(BSC, ContractName::Oracle)?);

    let provider = ProviderBuilder::new().connect(&rpc_url).await?;
    let client = Client::new(provider);

    let fee = client.fee().await?;
    let count = client.question_count().await?;
    info!("Question fee: {fee} wei");
    info!("Questions asked: {count}");
    info!(
        "Question length: {}..={} characters",
        client.min_question_length().await?,
        client.max_question_length().await?
    );
    info!(
        "Timeout: {}..={} seconds",
        client.min_timeout().await?,
        client.max_timeout().await?
    );

    if count > U256::ZERO {
        let question_id = count - U256::from(1);
        let question = client.question(question_id).await?;
        info!("Latest question #{question_id}: {}", serde_json::to_string_pretty(&question)?);

        if question.is_resolved {
            let answer = client.answer_record(question_id).await?;
            info!(
                "Answered by {} at {:?}: {}",
                answer.resolver,
                answer.answered(),
                answer.answer_data
            );
        }
    }

    if write_mode {
        info!("--- Asking a question (requires wallet) ---");

        let private_key =
            env::var(PRIVATE_KEY_VAR).expect("Need a private key for write operations");
        let signer = LocalSigner::from_str(&private_key)?.with_chain_id(Some(BSC));

        let provider = ProviderBuilder::new()
            .wallet(signer)
            .connect(&rpc_url)
            .await?;
        let client = Client::from_wallet(provider);

        let request = AskRequest::builder()
            .question_text("Will BNB close above $700 on Friday?")
            .timeout(7 * 86_400)
            .value(fee)
            .wait(Wait::included())
            .build();

        let question_id = client.simulate_ask(QuestionType::Boolean, &request).await?;
        info!("Simulation says the question will get id {question_id}");

        match client.ask_boolean(&request).await {
            Ok(submission) => {
                info!("✓ Question asked in {}", submission.transaction_hash());
                info!("  Block number: {:?}", submission.block_number());
            }
            Err(e) => error!("✗ Ask failed: {e}"),
        }
    }

    Ok(())
}
