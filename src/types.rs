//! Re-exported types from external crates for convenience, plus the on-chain enums shared by
//! more than one contract.
//!
//! These types are commonly used in this SDK and are re-exported here
//! so users don't need to add these dependencies to their `Cargo.toml`.

/// Ethereum address type and the [`address!`] macro for compile-time address literals.
/// [`ChainId`] is a type alias for `u64` representing EVM chain IDs.
/// [`B256`] is used for role identifiers and hashes, [`U256`]/[`I256`] for on-chain integers,
/// and [`Bytes`] for opaque answer and additional-data payloads.
pub use alloy::primitives::{
    Address, B256, Bytes, ChainId, FixedBytes, I256, TxHash, U256, address, b256, bytes,
};
/// Receipt returned once a submitted transaction has been included in a block.
pub use alloy::rpc::types::TransactionReceipt;
/// Date and time types for on-chain timestamps.
pub use chrono::{DateTime, Utc};
use serde_repr::{Deserialize_repr, Serialize_repr};
use strum_macros::Display;

use crate::dispatch::Wait;
use crate::error::Error;

/// Kind of question, as understood by both the oracle and the AMM.
#[non_exhaustive]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    Hash,
    PartialEq,
    Serialize_repr,
    Deserialize_repr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum QuestionType {
    #[default]
    General = 0,
    Boolean = 1,
    Numerical = 2,
    Categorical = 3,
    RangeNumerical = 4,
}

impl TryFrom<u8> for QuestionType {
    type Error = Error;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::General),
            1 => Ok(Self::Boolean),
            2 => Ok(Self::Numerical),
            3 => Ok(Self::Categorical),
            4 => Ok(Self::RangeNumerical),
            other => Err(Error::validation(format!(
                "Unable to create QuestionType from {other}"
            ))),
        }
    }
}

impl From<QuestionType> for u8 {
    fn from(value: QuestionType) -> Self {
        value as u8
    }
}

/// Lifecycle state of an AMM market.
#[non_exhaustive]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    Hash,
    PartialEq,
    Serialize_repr,
    Deserialize_repr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum MarketStatus {
    #[default]
    Active = 0,
    Cancelled = 1,
    Resolved = 2,
}

impl TryFrom<u8> for MarketStatus {
    type Error = Error;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Active),
            1 => Ok(Self::Cancelled),
            2 => Ok(Self::Resolved),
            other => Err(Error::validation(format!(
                "Unable to create MarketStatus from {other}"
            ))),
        }
    }
}

/// Request to grant, revoke or renounce an access-control role.
///
/// When renouncing, `account` must be the sender's own address.
#[non_exhaustive]
#[derive(Debug, Clone, bon::Builder)]
pub struct RoleRequest {
    pub role: B256,
    pub account: Address,
    #[builder(default)]
    pub wait: Wait,
}

/// Converts a `uint256` unix timestamp (seconds) into a [`DateTime<Utc>`].
///
/// Returns `None` for zero, which contracts use for "unset", and for values outside the range
/// `chrono` can represent.
#[must_use]
pub fn timestamp(seconds: U256) -> Option<DateTime<Utc>> {
    let seconds = u64::try_from(seconds).ok()?;
    if seconds == 0 {
        return None;
    }

    DateTime::from_timestamp(i64::try_from(seconds).ok()?, 0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Fine for tests")]
mod tests {
    use super::*;

    #[test]
    fn question_type_serializes_as_integer() {
        assert_eq!(
            serde_json::to_string(&QuestionType::RangeNumerical).unwrap(),
            "4"
        );
        assert_eq!(
            serde_json::from_str::<QuestionType>("1").unwrap(),
            QuestionType::Boolean
        );
        assert_eq!(QuestionType::RangeNumerical.to_string(), "RANGE_NUMERICAL");
    }

    #[test]
    fn unknown_discriminants_should_fail() {
        QuestionType::try_from(5).unwrap_err();
        MarketStatus::try_from(3).unwrap_err();
        assert_eq!(MarketStatus::try_from(2).unwrap(), MarketStatus::Resolved);
    }

    #[test]
    fn timestamp_conversion() {
        assert_eq!(timestamp(U256::ZERO), None);
        assert_eq!(timestamp(U256::MAX), None);
        assert_eq!(
            timestamp(U256::from(1_700_000_000_u64)).unwrap().to_rfc3339(),
            "2023-11-14T22:13:20+00:00"
        );
    }
}
