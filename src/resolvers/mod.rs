//! Clients for the Sybex resolver contracts.
//!
//! **Feature flag:** `resolvers` (required to use this module)
//!
//! Each question type has its own resolver contract that checks the answer's shape before
//! forwarding it to the oracle. A single [`Client`] addresses all four; the contract is picked
//! by the resolve method, or by [`ResolverKind`](types::ResolverKind) for role management.
//!
//! # Example
//!
//! ```ignore
//! use sybex_client_sdk::resolvers::{Client, types::*};
//! use sybex_client_sdk::types::U256;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::from_wallet(provider);
//!
//! let request = ResolveBinaryRequest::builder()
//!     .question_id(U256::from(7))
//!     .outcome(1)
//!     .proof("https://www.weather.gov.sg/climate-historical-daily/")
//!     .build();
//!
//! let submission = client.resolve_binary(&request).await?;
//! println!("Resolved in {}", submission.transaction_hash());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::Client;
