//! Request types for AMM operations.

use alloy::primitives::U256;
use bon::Builder;

use crate::dispatch::Wait;
use crate::types::{Address, DateTime, QuestionType, Utc};

/// Request to create a market.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct CreateMarketRequest {
    #[builder(into)]
    pub question: String,
    /// One label per outcome, in outcome id order
    pub outcome_labels: Vec<String>,
    pub question_type: QuestionType,
    /// Token positions are placed with; the zero address means native BNB
    #[builder(default)]
    pub token: Address,
    /// After this instant no more positions are accepted
    pub deadline: DateTime<Utc>,
    /// Native amount sent with the transaction (market creation fee)
    #[builder(default)]
    pub value: U256,
    #[builder(default)]
    pub wait: Wait,
}

/// Request to place a position with native BNB, sent as the transaction value.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct PlacePositionRequest {
    pub market_id: U256,
    pub outcome_id: U256,
    pub value: U256,
    #[builder(default)]
    pub wait: Wait,
}

/// Request to place a position with a supported token. The AMM must already be approved to
/// transfer `amount` of `token`.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct PlacePositionWithTokenRequest {
    pub market_id: U256,
    pub outcome_id: U256,
    pub amount: U256,
    pub token: Address,
    #[builder(default)]
    pub wait: Wait,
}

/// Request for a market-level action: claiming, refunding, resolving or cancelling.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct MarketRequest {
    pub market_id: U256,
    #[builder(default)]
    pub wait: Wait,
}

/// Identifies one outcome of a market.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Builder)]
pub struct OutcomeRequest {
    pub market_id: U256,
    pub outcome_id: U256,
}

#[non_exhaustive]
#[derive(Debug, Clone, Copy, Builder)]
pub struct UserPositionRequest {
    pub market_id: U256,
    pub outcome_id: U256,
    pub user: Address,
}

/// Request to change the fee taken from each pool.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct SetFeePercentageRequest {
    pub fee_percentage: U256,
    #[builder(default)]
    pub wait: Wait,
}

#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct SetFeeRecipientRequest {
    pub fee_recipient: Address,
    #[builder(default)]
    pub wait: Wait,
}

/// Request to point the AMM at a different oracle.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct SetOracleRequest {
    pub oracle: Address,
    #[builder(default)]
    pub wait: Wait,
}

/// Request for a token-level action: adding or removing a supported token, or withdrawing
/// the fees accumulated in it.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct TokenRequest {
    pub token: Address,
    #[builder(default)]
    pub wait: Wait,
}

/// One-time initialization of a freshly deployed (proxied) AMM.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct InitializeRequest {
    pub oracle: Address,
    pub fee_recipient: Address,
    pub fee_percentage: U256,
    pub admin: Address,
    #[builder(default)]
    pub wait: Wait,
}
