//! Request types for oracle operations.

use alloy::primitives::{Bytes, U256};
use bon::Builder;

use crate::dispatch::Wait;
use crate::types::Address;

/// Request to ask the oracle a question.
///
/// The same request serves every question type; the type is picked by the method it is
/// passed to (`ask_boolean`, `ask_numeric`, ...) or given explicitly to `ask`.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct AskRequest {
    /// Question text, 1 to 1000 characters
    #[builder(into)]
    pub question_text: String,
    /// Seconds until the question expires, at most 30 days
    pub timeout: u64,
    /// Opaque payload stored alongside the question (e.g. category labels)
    #[builder(default)]
    pub additional_data: Bytes,
    /// Native amount sent with the transaction, normally the current question fee
    #[builder(default)]
    pub value: U256,
    #[builder(default)]
    pub wait: Wait,
}

/// Request to answer a question as a resolver.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct ProvideAnswerRequest {
    pub question_id: U256,
    /// ABI-encoded answer, shaped by the question type
    pub answer_data: Bytes,
    #[builder(default)]
    pub wait: Wait,
}

/// Request to add or remove a resolver.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct ResolverRequest {
    pub resolver: Address,
    #[builder(default)]
    pub wait: Wait,
}

/// Request to change the question fee.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct SetFeeRequest {
    /// New fee in wei
    pub fee: U256,
    #[builder(default)]
    pub wait: Wait,
}

/// Request to change where question fees are sent.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct SetFeeRecipientRequest {
    pub fee_recipient: Address,
    #[builder(default)]
    pub wait: Wait,
}
