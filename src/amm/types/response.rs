//! Response types for AMM operations.

use alloy::primitives::U256;
use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::types::{Address, DateTime, MarketStatus, QuestionType, Utc, timestamp};

/// A market as returned by `getMarket`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub question: String,
    pub question_type: QuestionType,
    /// Zero for markets settled in native BNB
    pub token: Address,
    pub status: MarketStatus,
    pub total_pool: U256,
    pub total_fees: U256,
    /// Only meaningful once `status` is [`MarketStatus::Resolved`]
    pub winning_outcome: U256,
    /// Unix timestamp (seconds)
    pub deadline: U256,
    pub owner: Address,
}

impl Market {
    #[must_use]
    pub fn deadline_at(&self) -> Option<DateTime<Utc>> {
        timestamp(self.deadline)
    }

    #[must_use]
    pub fn is_native(&self) -> bool {
        self.token == Address::ZERO
    }

    /// The winning outcome, once there is one.
    #[must_use]
    pub fn winner(&self) -> Option<U256> {
        (self.status == MarketStatus::Resolved).then_some(self.winning_outcome)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Fine for tests")]
mod tests {
    use super::*;
    use crate::types::address;

    fn market(status: MarketStatus) -> Market {
        Market::builder()
            .question("Will BTC trade above $100k on 31 Dec?".to_owned())
            .question_type(QuestionType::Boolean)
            .token(Address::ZERO)
            .status(status)
            .total_pool(U256::from(5_000_000_000_000_000_000_u128))
            .total_fees(U256::from(100_000_000_000_000_000_u128))
            .winning_outcome(U256::from(1))
            .deadline(U256::from(1_767_139_200_u64))
            .owner(address!("0x00000000000000000000000000000000000000bb"))
            .build()
    }

    #[test]
    fn winner_requires_resolution() {
        assert_eq!(market(MarketStatus::Active).winner(), None);
        assert_eq!(market(MarketStatus::Cancelled).winner(), None);
        assert_eq!(market(MarketStatus::Resolved).winner(), Some(U256::from(1)));
    }

    #[test]
    fn native_market_and_deadline() {
        let market = market(MarketStatus::Active);

        assert!(market.is_native());
        assert_eq!(
            market.deadline_at().unwrap().to_rfc3339(),
            "2025-12-31T00:00:00+00:00"
        );
    }
}
