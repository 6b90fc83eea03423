//! Response types for oracle operations.

use alloy::primitives::{Bytes, U256};
use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::types::{Address, DateTime, QuestionType, Utc, timestamp};

/// A question as stored by the oracle.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_type: QuestionType,
    pub question_text: String,
    /// Seconds after `created_at` at which the question expires
    pub timeout: U256,
    pub additional_data: Bytes,
    pub asker: Address,
    pub is_resolved: bool,
    /// Unix timestamp (seconds) of the block the question was asked in
    pub created_at: U256,
}

impl Question {
    /// When the question was asked. `None` for a question id that does not exist.
    #[must_use]
    pub fn asked_at(&self) -> Option<DateTime<Utc>> {
        timestamp(self.created_at)
    }

    /// When the question stops accepting answers.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        if self.created_at.is_zero() {
            return None;
        }

        timestamp(self.created_at.checked_add(self.timeout)?)
    }

    /// An unset question reads back as all zeroes.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.asker != Address::ZERO
    }
}

/// Answer data and the resolver who provided it, as returned by `getAnswer`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub answer_data: Bytes,
    pub resolver: Address,
}

/// Full answer entry as stored by the oracle, including when it was given.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub answer_data: Bytes,
    pub resolver: Address,
    pub answered_at: U256,
}

impl AnswerRecord {
    #[must_use]
    pub fn answered(&self) -> Option<DateTime<Utc>> {
        timestamp(self.answered_at)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Fine for tests")]
mod tests {
    use super::*;
    use crate::types::address;

    fn question(created_at: u64, timeout: u64) -> Question {
        Question::builder()
            .question_type(QuestionType::Boolean)
            .question_text("Will it rain in Singapore tomorrow?".to_owned())
            .timeout(U256::from(timeout))
            .additional_data(Bytes::new())
            .asker(address!("0x00000000000000000000000000000000000000aa"))
            .is_resolved(false)
            .created_at(U256::from(created_at))
            .build()
    }

    #[test]
    fn expiry_is_creation_plus_timeout() {
        let question = question(1_700_000_000, 86_400);

        assert!(question.exists());
        assert_eq!(
            question.expires_at().unwrap() - question.asked_at().unwrap(),
            chrono::Duration::days(1)
        );
    }

    #[test]
    fn unset_question_has_no_timestamps() {
        let question = question(0, 86_400);

        assert_eq!(question.asked_at(), None);
        assert_eq!(question.expires_at(), None);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(question(1_700_000_000, 60)).unwrap();

        assert_eq!(value["questionType"], 1);
        assert_eq!(value["isResolved"], false);
        assert!(value.get("questionText").is_some());
    }
}
