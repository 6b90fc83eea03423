//! Types for AMM operations.

mod request;
mod response;

pub use request::{
    CreateMarketRequest, InitializeRequest, MarketRequest, OutcomeRequest,
    PlacePositionRequest, PlacePositionWithTokenRequest, SetFeePercentageRequest,
    SetFeeRecipientRequest, SetOracleRequest, TokenRequest, UserPositionRequest,
};
pub use response::Market;

pub use crate::types::{MarketStatus, QuestionType, RoleRequest};
