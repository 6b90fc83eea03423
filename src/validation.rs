//! Precondition checks run before a call is dispatched.
//!
//! Each guard is a pure function: it either accepts its input (possibly narrowing it to the
//! type the contract expects) or returns a [`Kind::Validation`](crate::error::Kind) error.
//! Nothing here touches the network, so a rejected input never costs a transaction fee.

use std::fmt::Display;
use std::str::FromStr as _;

use crate::error::Error;
use crate::types::{Address, ChainId};
use crate::{Result, SUPPORTED_CHAINS};

/// Longest question text accepted, in characters.
pub const MAX_QUESTION_LENGTH: usize = 1000;

/// Longest question timeout accepted: 30 days, in seconds.
pub const MAX_TIMEOUT: u64 = 86_400 * 30;

/// Rejects empty (or whitespace-only) question text and text longer than
/// [`MAX_QUESTION_LENGTH`] characters.
pub fn validate_question_text(question_text: &str) -> Result<()> {
    if question_text.trim().is_empty() {
        return Err(Error::validation("Question text cannot be empty"));
    }
    if question_text.chars().count() > MAX_QUESTION_LENGTH {
        return Err(Error::validation(format!(
            "Question text too long (max {MAX_QUESTION_LENGTH} characters)"
        )));
    }

    Ok(())
}

/// Accepts timeouts in `1..=MAX_TIMEOUT` seconds.
pub fn validate_timeout(timeout: u64) -> Result<()> {
    if timeout == 0 {
        return Err(Error::validation("Timeout must be greater than 0"));
    }
    if timeout > MAX_TIMEOUT {
        return Err(Error::validation(format!(
            "Timeout cannot exceed {MAX_TIMEOUT} seconds (30 days)"
        )));
    }

    Ok(())
}

/// Narrows a category index to the `uint8` the categorical resolver takes.
pub fn validate_category_index(category_index: i64) -> Result<u8> {
    u8::try_from(category_index)
        .map_err(|_e| Error::validation("Category index must be between 0 and 255"))
}

/// Accepts exactly `0` and `1`.
pub fn validate_binary_outcome(outcome: i64) -> Result<u8> {
    match outcome {
        0 => Ok(0),
        1 => Ok(1),
        _ => Err(Error::validation("Binary outcome must be 0 or 1")),
    }
}

/// Accepts a range iff `lower_bound < upper_bound`.
pub fn validate_range<T: PartialOrd + Display>(lower_bound: T, upper_bound: T) -> Result<()> {
    if lower_bound >= upper_bound {
        return Err(Error::validation(format!(
            "Lower bound must be less than upper bound (got {lower_bound} >= {upper_bound})"
        )));
    }

    Ok(())
}

/// Parses a `0x`-prefixed, 42 character hex address.
pub fn validate_address(address: &str) -> Result<Address> {
    if !address.starts_with("0x") || address.len() != 42 {
        return Err(Error::validation(format!("Invalid address: {address}")));
    }

    Address::from_str(address)
        .map_err(|e| Error::validation(format!("Invalid address {address}: {e}")))
}

/// Accepts only chain ids listed in [`SUPPORTED_CHAINS`].
pub fn validate_chain_id(chain_id: u64) -> Result<ChainId> {
    if SUPPORTED_CHAINS.contains(&chain_id) {
        return Ok(chain_id);
    }

    let supported = SUPPORTED_CHAINS
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Err(Error::validation(format!(
        "Chain ID {chain_id} is not supported. Supported chains: {supported}"
    )))
}
