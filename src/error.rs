use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

use alloy::primitives::ChainId;
use alloy::providers::PendingTransactionError;
use alloy::transports::TransportError;

use crate::ContractName;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Requested chain or contract is missing from the compiled-in tables
    Configuration,
    /// Input rejected before any network interaction
    Validation,
    /// A write was attempted without a signing account
    Signer,
    /// Error returned by the network or the destination contract
    Contract,
    /// Internal error from dependencies
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            reason: message.into(),
        }
        .into()
    }

    #[must_use]
    pub fn missing_contract_config(chain_id: ChainId, contract: Option<ContractName>) -> Self {
        MissingContractConfig { chain_id, contract }.into()
    }

    #[must_use]
    pub fn unsupported_chain(chain_id: ChainId) -> Self {
        UnsupportedChain { chain_id }.into()
    }

    #[must_use]
    pub fn missing_signer() -> Self {
        MissingSigner.into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

/// A chain id, or a contract on a known chain, has no entry in the address table.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct MissingContractConfig {
    pub chain_id: ChainId,
    /// `None` when the whole chain is missing from the table
    pub contract: Option<ContractName>,
}

impl fmt::Display for MissingContractConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.contract {
            Some(contract) => write!(
                f,
                "contract {contract} not found for chain id {}",
                self.chain_id
            ),
            None => write!(f, "no contracts found for chain id {}", self.chain_id),
        }
    }
}

impl StdError for MissingContractConfig {}

#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct UnsupportedChain {
    pub chain_id: ChainId,
}

impl fmt::Display for UnsupportedChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chain id {} is not supported", self.chain_id)
    }
}

impl StdError for UnsupportedChain {}

/// A contract label that is not one of the known [`ContractName`]s.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct UnknownContract {
    pub name: String,
}

impl fmt::Display for UnknownContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown contract name {}", self.name)
    }
}

impl StdError for UnknownContract {}

#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct MissingSigner;

impl fmt::Display for MissingSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "client must have a signing account to write transactions"
        )
    }
}

impl StdError for MissingSigner {}

impl From<MissingContractConfig> for Error {
    fn from(err: MissingContractConfig) -> Self {
        Error::with_source(Kind::Configuration, err)
    }
}

impl From<UnsupportedChain> for Error {
    fn from(err: UnsupportedChain) -> Self {
        Error::with_source(Kind::Configuration, err)
    }
}

impl From<UnknownContract> for Error {
    fn from(err: UnknownContract) -> Self {
        Error::with_source(Kind::Configuration, err)
    }
}

impl From<MissingSigner> for Error {
    fn from(err: MissingSigner) -> Self {
        Error::with_source(Kind::Signer, err)
    }
}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<alloy::contract::Error> for Error {
    fn from(e: alloy::contract::Error) -> Self {
        Error::with_source(Kind::Contract, e)
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Error::with_source(Kind::Contract, e)
    }
}

impl From<PendingTransactionError> for Error {
    fn from(e: PendingTransactionError) -> Self {
        Error::with_source(Kind::Contract, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_chain_display_should_name_chain() {
        let error = Error::missing_contract_config(99999, None);

        assert_eq!(error.kind(), Kind::Configuration);
        assert_eq!(
            error.to_string(),
            "Configuration: no contracts found for chain id 99999"
        );
    }

    #[test]
    fn missing_contract_display_should_name_both() {
        let error = Error::missing_contract_config(56, Some(ContractName::AmmV2));

        assert!(error.to_string().contains("SYBEX_AMM_V2"));
        assert!(error.to_string().contains("56"));
    }

    #[test]
    fn missing_signer_should_have_signer_kind() {
        let error = Error::missing_signer();

        assert_eq!(error.kind(), Kind::Signer);
        assert!(error.downcast_ref::<MissingSigner>().is_some());
    }

    #[test]
    fn validation_into_error_should_succeed() {
        let error = Error::validation("Lower bound must be less than upper bound");

        assert_eq!(error.kind(), Kind::Validation);
        assert_eq!(
            error.to_string(),
            "Validation: invalid: Lower bound must be less than upper bound"
        );
    }
}
