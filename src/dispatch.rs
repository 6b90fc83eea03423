//! Uniform adapters that every contract client routes its calls through.
//!
//! A call is always a `sol!`-generated [`SolCallBuilder`], so the same three functions serve
//! every contract and every operation:
//!
//! - [`read`] performs one `eth_call` and returns the decoded value as-is.
//! - [`simulate`] dry-runs a state-changing call and returns what it would return.
//! - [`send`] submits a transaction and, depending on [`Wait`], waits for its receipt.
//!
//! Nothing here retries, caches, or keeps state between calls.

use std::time::Duration;

use alloy::contract::SolCallBuilder;
use alloy::providers::Provider;
use alloy::sol_types::SolCall;

use crate::error::Error;
use crate::types::{Address, TransactionReceipt, TxHash};
use crate::{Chain, ContractName, Result};

/// How long [`send`] waits after a transaction has been accepted by the node.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Wait {
    /// Return as soon as the transaction hash is known. No receipt is requested.
    #[default]
    Submitted,
    /// Wait until the transaction has `confirmations` blocks on top of it (the including
    /// block counts as one), giving up after `timeout` if set.
    Included {
        confirmations: u64,
        timeout: Option<Duration>,
    },
}

impl Wait {
    /// Wait for inclusion in a single block, without a timeout.
    #[must_use]
    pub const fn included() -> Self {
        Self::Included {
            confirmations: 1,
            timeout: None,
        }
    }

    #[must_use]
    pub const fn with_timeout(self, timeout: Duration) -> Self {
        match self {
            Self::Submitted => Self::Submitted,
            Self::Included { confirmations, .. } => Self::Included {
                confirmations,
                timeout: Some(timeout),
            },
        }
    }
}

/// Outcome of [`send`], shaped by the [`Wait`] mode it was called with.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum Submission {
    /// Accepted by the node; inclusion has not been observed.
    Pending(TxHash),
    /// Included in a block.
    Confirmed(Box<TransactionReceipt>),
}

impl Submission {
    #[must_use]
    pub fn transaction_hash(&self) -> TxHash {
        match self {
            Self::Pending(hash) => *hash,
            Self::Confirmed(receipt) => receipt.transaction_hash,
        }
    }

    #[must_use]
    pub fn receipt(&self) -> Option<&TransactionReceipt> {
        match self {
            Self::Pending(_) => None,
            Self::Confirmed(receipt) => Some(receipt),
        }
    }

    /// Block the transaction was included in, if a receipt was awaited.
    #[must_use]
    pub fn block_number(&self) -> Option<u64> {
        self.receipt().and_then(|receipt| receipt.block_number)
    }

    /// Whether a receipt was awaited. A mined transaction that reverted is still confirmed;
    /// use [`Submission::succeeded`] to check its status.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed(_))
    }

    /// Whether the transaction was mined and executed successfully. `None` while pending.
    #[must_use]
    pub fn succeeded(&self) -> Option<bool> {
        self.receipt().map(TransactionReceipt::status)
    }
}

/// Everything a write needs resolved before it can be submitted.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct Target {
    /// Sender of the transaction
    pub account: Address,
    /// Deployed address of the destination contract on [`Target::chain`]
    pub address: Address,
    pub chain: &'static Chain,
}

impl Target {
    /// Resolves the destination of a write against whatever network `provider` is connected
    /// to.
    ///
    /// The signing account is checked first, so a client without one fails before any
    /// network interaction.
    pub async fn resolve<P: Provider>(
        provider: &P,
        account: Option<Address>,
        contract: ContractName,
    ) -> Result<Self> {
        let account = account.ok_or_else(Error::missing_signer)?;
        let chain_id = crate::chain_id(provider).await?;
        let address = crate::contract_address(chain_id, contract)?;
        let chain = crate::chain(chain_id)?;

        Ok(Self {
            account,
            address,
            chain,
        })
    }

    /// Stamps the sender and the descriptor's chain id onto `call`.
    #[must_use]
    pub fn prepare<P: Provider, C: SolCall>(
        &self,
        call: SolCallBuilder<P, C>,
    ) -> SolCallBuilder<P, C> {
        call.from(self.account).chain_id(self.chain.id)
    }
}

/// Resolves the address of `contract` on the network `provider` is connected to.
///
/// Reads and simulations go through here; they need neither a signer nor a chain descriptor.
pub async fn resolve_address<P: Provider>(provider: &P, contract: ContractName) -> Result<Address> {
    let chain_id = crate::chain_id(provider).await?;
    crate::contract_address(chain_id, contract)
}

/// Executes a read-only call and returns the decoded value unchanged.
pub async fn read<P: Provider, C: SolCall>(call: SolCallBuilder<P, C>) -> Result<C::Return> {
    #[cfg(feature = "tracing")]
    tracing::trace!(function = C::SIGNATURE, "eth_call");

    Ok(call.call().await?)
}

/// Dry-runs a state-changing call, including its sender and value, and returns what it would
/// return if it were mined right now.
pub async fn simulate<P: Provider, C: SolCall>(call: SolCallBuilder<P, C>) -> Result<C::Return> {
    #[cfg(feature = "tracing")]
    tracing::debug!(function = C::SIGNATURE, "simulating");

    Ok(call.call().await?)
}

/// Submits `call` as a transaction.
///
/// With [`Wait::Submitted`] this returns [`Submission::Pending`] as soon as the node hands
/// back the hash. With [`Wait::Included`] it polls for the receipt and returns
/// [`Submission::Confirmed`]. A receipt with a failed status is still returned as-is.
pub async fn send<P: Provider, C: SolCall>(
    call: SolCallBuilder<P, C>,
    wait: Wait,
) -> Result<Submission> {
    let pending = call.send().await?;
    let transaction_hash = *pending.tx_hash();

    #[cfg(feature = "tracing")]
    tracing::debug!(function = C::SIGNATURE, %transaction_hash, "transaction submitted");

    match wait {
        Wait::Submitted => Ok(Submission::Pending(transaction_hash)),
        Wait::Included {
            confirmations,
            timeout,
        } => {
            let receipt = pending
                .with_required_confirmations(confirmations)
                .with_timeout(timeout)
                .get_receipt()
                .await?;

            #[cfg(feature = "tracing")]
            tracing::debug!(
                %transaction_hash,
                block_number = ?receipt.block_number,
                gas_used = receipt.gas_used,
                "transaction included"
            );

            Ok(Submission::Confirmed(Box::new(receipt)))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::types::b256;

    #[test]
    fn default_wait_is_submitted() {
        assert_eq!(Wait::default(), Wait::Submitted);
    }

    #[test]
    fn included_waits_for_one_block() {
        assert_eq!(
            Wait::included(),
            Wait::Included {
                confirmations: 1,
                timeout: None
            }
        );
    }

    #[test]
    fn timeout_only_applies_to_included() {
        let timeout = Duration::from_secs(30);

        assert_eq!(Wait::Submitted.with_timeout(timeout), Wait::Submitted);
        assert_eq!(
            Wait::included().with_timeout(timeout),
            Wait::Included {
                confirmations: 1,
                timeout: Some(timeout)
            }
        );
    }

    #[test]
    fn pending_submission_has_no_receipt() {
        let hash = b256!("0x1111111111111111111111111111111111111111111111111111111111111111");
        let submission = Submission::Pending(hash);

        assert_eq!(submission.transaction_hash(), hash);
        assert!(submission.receipt().is_none());
        assert!(submission.block_number().is_none());
        assert!(!submission.is_confirmed());
        assert_eq!(submission.succeeded(), None);
    }
}
