//! Sybex prediction-market AMM (v2) client.
//!
//! **Feature flag:** `amm` (required to use this module)
//!
//! Markets are parimutuel pools: positions are placed on an outcome with BNB or a supported
//! BEP-20 token, and once the linked oracle question is answered the winning side claims the
//! pool minus fees.
//!
//! # Features
//!
//! - **Markets**: Create, resolve and cancel markets
//! - **Positions**: Place positions with BNB or a token, claim winnings, refund cancelled markets
//! - **Administration**: Fees, supported tokens, oracle address and roles
//!
//! # Example
//!
//! ```ignore
//! use sybex_client_sdk::amm::{Client, types::*};
//! use sybex_client_sdk::types::U256;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::from_wallet(provider);
//!
//! let market = client.market(U256::from(3)).await?;
//! println!("{} ({})", market.question, market.status);
//!
//! let request = PlacePositionRequest::builder()
//!     .market_id(U256::from(3))
//!     .outcome_id(U256::from(0))
//!     .value(U256::from(10).pow(U256::from(16)))
//!     .build();
//! client.place_position(&request).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::Client;
