//! Sybex oracle client.
//!
//! **Feature flag:** `oracle` (required to use this module)
//!
//! The oracle stores questions asked by anyone who pays the question fee, and the answers
//! provided by accounts holding the resolver role.
//!
//! # Features
//!
//! - **Asking**: Submit general, boolean, numeric, categorical and range questions
//! - **Answering**: Provide answer data for a question as a resolver
//! - **Administration**: Manage resolvers, fees and access-control roles
//! - **Reads**: Questions, answers, fees and contract limits
//!
//! # Example
//!
//! ```ignore
//! use sybex_client_sdk::oracle::{Client, types::*};
//! use sybex_client_sdk::dispatch::Wait;
//! use alloy::providers::ProviderBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = ProviderBuilder::new()
//!     .wallet(signer)
//!     .connect("https://bsc-dataseed1.binance.org/")
//!     .await?;
//! let client = Client::from_wallet(provider);
//!
//! let fee = client.fee().await?;
//! let request = AskRequest::builder()
//!     .question_text("Will BNB close above $700 on Friday?")
//!     .timeout(86_400)
//!     .value(fee)
//!     .wait(Wait::included())
//!     .build();
//!
//! let question_id = client.simulate_ask(QuestionType::Boolean, &request).await?;
//! let submission = client.ask_boolean(&request).await?;
//! println!("Question {question_id} asked in {}", submission.transaction_hash());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::Client;
