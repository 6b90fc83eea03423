//! Request types for resolver operations.

use alloy::primitives::{I256, U256};
use bon::Builder;

use crate::dispatch::Wait;

/// Request to resolve a yes/no question.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct ResolveBinaryRequest {
    pub question_id: U256,
    /// `0` for no, `1` for yes
    pub outcome: i64,
    /// Where the answer can be verified, e.g. a source URL
    #[builder(into, default)]
    pub proof: String,
    #[builder(default)]
    pub wait: Wait,
}

/// Request to resolve a categorical question with the index of the winning category.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct ResolveCategoricalRequest {
    pub question_id: U256,
    /// Zero-based category index, at most 255
    pub category_index: i64,
    #[builder(into, default)]
    pub proof: String,
    #[builder(default)]
    pub wait: Wait,
}

/// Request to resolve a numeric question.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct ResolveNumericalRequest {
    pub question_id: U256,
    pub answer: I256,
    #[builder(into, default)]
    pub proof: String,
    #[builder(default)]
    pub wait: Wait,
}

/// Request to resolve a range question with the bounds the true value falls between.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct ResolveRangeNumericalRequest {
    pub question_id: U256,
    /// Must be strictly less than `upper_bound`
    pub lower_bound: I256,
    pub upper_bound: I256,
    #[builder(into, default)]
    pub proof: String,
    #[builder(default)]
    pub wait: Wait,
}
