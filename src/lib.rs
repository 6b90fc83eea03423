#![cfg_attr(doc, doc = include_str!("../README.md"))]

#[cfg(feature = "amm")]
pub mod amm;
pub mod dispatch;
pub mod error;
#[cfg(feature = "oracle")]
pub mod oracle;
#[cfg(feature = "resolvers")]
pub mod resolvers;
pub mod types;
pub mod validation;

use std::fmt;
use std::str::FromStr;

use alloy::providers::Provider;
use phf::phf_map;
use serde::Serialize;
use url::Url;

use crate::error::{Error, UnknownContract};
use crate::types::{Address, ChainId, address};

pub type Result<T> = std::result::Result<T, Error>;

/// [`ChainId`] for BNB Smart Chain mainnet
pub const BSC: ChainId = 56;

/// Every chain id that has both a [`Chain`] descriptor and a deployed contract set.
pub const SUPPORTED_CHAINS: [ChainId; 1] = [BSC];

pub const PRIVATE_KEY_VAR: &str = "SYBEX_PRIVATE_KEY";

pub const RPC_URL_VAR: &str = "SYBEX_RPC_URL";

/// Logical name of a deployed Sybex contract, independent of the network it lives on.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
pub enum ContractName {
    #[strum(serialize = "SYBEX_ORACLE")]
    #[serde(rename = "SYBEX_ORACLE")]
    Oracle,
    #[strum(serialize = "SYBEX_BINARY_RESOLVER")]
    #[serde(rename = "SYBEX_BINARY_RESOLVER")]
    BinaryResolver,
    #[strum(serialize = "SYBEX_CATEGORICAL_RESOLVER")]
    #[serde(rename = "SYBEX_CATEGORICAL_RESOLVER")]
    CategoricalResolver,
    #[strum(serialize = "SYBEX_NUMERICAL_RESOLVER")]
    #[serde(rename = "SYBEX_NUMERICAL_RESOLVER")]
    NumericalResolver,
    #[strum(serialize = "SYBEX_RANGE_NUMERICAL_RESOLVER")]
    #[serde(rename = "SYBEX_RANGE_NUMERICAL_RESOLVER")]
    RangeNumericalResolver,
    #[strum(serialize = "SYBEX_AMM")]
    #[serde(rename = "SYBEX_AMM")]
    Amm,
    #[strum(serialize = "SYBEX_AMM_V2")]
    #[serde(rename = "SYBEX_AMM_V2")]
    AmmV2,
}

impl ContractName {
    pub const ALL: [ContractName; 7] = [
        ContractName::Oracle,
        ContractName::BinaryResolver,
        ContractName::CategoricalResolver,
        ContractName::NumericalResolver,
        ContractName::RangeNumericalResolver,
        ContractName::Amm,
        ContractName::AmmV2,
    ];
}

impl FromStr for ContractName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.to_string() == s)
            .ok_or_else(|| {
                UnknownContract {
                    name: s.to_owned(),
                }
                .into()
            })
    }
}

type ContractTable = phf::Map<ChainId, &'static [(ContractName, Address)]>;

static CONTRACTS: ContractTable = phf_map! {
    56_u64 => &[
        (ContractName::Oracle, address!("0x5a9b54ce65cca0a18177a19b712a5d51a08e88bc")),
        (ContractName::BinaryResolver, address!("0x161d6eb7aa95a0c937a83dac72c57692f825765d")),
        (ContractName::CategoricalResolver, address!("0x1b35d500f49092722a8fd60037c6fc0eb60c99f6")),
        (ContractName::NumericalResolver, address!("0xdad6c7cb25a51956c8d97ca324477ffbae997a69")),
        (ContractName::RangeNumericalResolver, address!("0xe77fade20d49fa6b4c60c039a1c7761b91c54724")),
        (ContractName::Amm, address!("0xde8d058f0d6126e5e6071a1853b350f3978328e5")),
        (ContractName::AmmV2, address!("0x95a69568a3ebd96339c8ad15772fd94570ebad2c")),
    ],
};

static CHAINS: phf::Map<ChainId, Chain> = phf_map! {
    56_u64 => Chain {
        id: BSC,
        name: "BNB Smart Chain",
        native_currency: NativeCurrency {
            name: "BNB",
            symbol: "BNB",
            decimals: 18,
        },
        default_rpc_url: "https://bsc-dataseed1.binance.org/",
        block_explorer: BlockExplorer {
            name: "BscScan",
            url: "https://bscscan.com",
        },
        testnet: false,
    },
};

/// Static description of a supported network: what a transaction needs to be addressed and
/// signed for it.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chain {
    pub id: ChainId,
    pub name: &'static str,
    pub native_currency: NativeCurrency,
    pub default_rpc_url: &'static str,
    pub block_explorer: BlockExplorer,
    pub testnet: bool,
}

impl Chain {
    /// Parsed [`Chain::default_rpc_url`].
    pub fn rpc_url(&self) -> Result<Url> {
        Ok(Url::parse(self.default_rpc_url)?)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockExplorer {
    pub name: &'static str,
    pub url: &'static str,
}

/// Queries the provider for the chain it is connected to.
///
/// The result is never cached, so every call targets whatever network the provider is
/// attached to at that moment.
pub async fn chain_id<P: Provider>(provider: &P) -> Result<ChainId> {
    Ok(provider.get_chain_id().await?)
}

/// Given a `chain_id` and a [`ContractName`], return the deployed contract address.
///
/// A miss is a configuration error: the contract has not been deployed (or registered in
/// this SDK) for that network.
pub fn contract_address(chain_id: ChainId, contract: ContractName) -> Result<Address> {
    lookup_address(&CONTRACTS, chain_id, contract)
}

fn lookup_address(
    table: &ContractTable,
    chain_id: ChainId,
    contract: ContractName,
) -> Result<Address> {
    let contracts = table
        .get(&chain_id)
        .ok_or_else(|| Error::missing_contract_config(chain_id, None))?;

    contracts
        .iter()
        .find_map(|(name, address)| (*name == contract).then_some(*address))
        .ok_or_else(|| Error::missing_contract_config(chain_id, Some(contract)))
}

/// Returns the [`Chain`] descriptor for `chain_id`.
pub fn chain(chain_id: ChainId) -> Result<&'static Chain> {
    CHAINS
        .get(&chain_id)
        .ok_or_else(|| Error::unsupported_chain(chain_id))
}

pub use crate::validation::validate_chain_id;

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Fine for tests")]
mod tests {
    use super::*;
    use crate::error::{Kind, MissingContractConfig};

    static PARTIAL: ContractTable = phf_map! {
        97_u64 => &[
            (ContractName::Oracle, address!("0x0000000000000000000000000000000000000001")),
        ],
    };

    #[test]
    fn every_supported_chain_has_every_contract() {
        for chain_id in SUPPORTED_CHAINS {
            for contract in ContractName::ALL {
                let address = contract_address(chain_id, contract)
                    .unwrap_or_else(|e| panic!("{contract} missing on {chain_id}: {e}"));
                assert_ne!(address, Address::ZERO, "{contract} on {chain_id}");
                assert_eq!(address.to_string().len(), 42, "{contract} on {chain_id}");
            }
        }
    }

    #[test]
    fn contract_addresses_are_distinct() {
        let mut addresses = ContractName::ALL
            .into_iter()
            .map(|contract| contract_address(BSC, contract).expect("missing config"))
            .collect::<Vec<_>>();
        addresses.sort();
        addresses.dedup();

        assert_eq!(addresses.len(), ContractName::ALL.len());
    }

    #[test]
    fn config_contains_56_oracle() {
        assert_eq!(
            contract_address(BSC, ContractName::Oracle).expect("missing config"),
            address!("0x5a9b54ce65cca0a18177a19b712a5d51a08e88bc")
        );
    }

    #[test]
    fn unknown_chain_should_name_chain() {
        let err = contract_address(99999, ContractName::Oracle).unwrap_err();

        assert_eq!(err.kind(), Kind::Configuration);
        assert!(err.to_string().contains("99999"));
        let source = err
            .downcast_ref::<MissingContractConfig>()
            .expect("wrong source");
        assert_eq!(source.contract, None);
    }

    #[test]
    fn missing_contract_on_known_chain_should_name_both() {
        lookup_address(&PARTIAL, 97, ContractName::Oracle).expect("missing config");

        let err = lookup_address(&PARTIAL, 97, ContractName::AmmV2).unwrap_err();
        let message = err.to_string();

        assert_eq!(err.kind(), Kind::Configuration);
        assert!(message.contains("SYBEX_AMM_V2"), "{message}");
        assert!(message.contains("97"), "{message}");
    }

    #[test]
    fn contract_name_round_trips_through_labels() {
        for contract in ContractName::ALL {
            assert_eq!(
                contract.to_string().parse::<ContractName>().expect("parse"),
                contract
            );
        }
        assert_eq!(
            "SYBEX_RANGE_NUMERICAL_RESOLVER"
                .parse::<ContractName>()
                .expect("parse"),
            ContractName::RangeNumericalResolver
        );
    }

    #[test]
    fn unknown_contract_name_should_name_label() {
        let err = "NOT_A_REAL_CONTRACT".parse::<ContractName>().unwrap_err();

        assert_eq!(err.kind(), Kind::Configuration);
        assert!(err.to_string().contains("NOT_A_REAL_CONTRACT"));
    }

    #[test]
    fn chain_descriptor_for_bsc() {
        let bsc = chain(BSC).expect("missing chain");

        assert_eq!(bsc.id, BSC);
        assert_eq!(bsc.native_currency.symbol, "BNB");
        assert_eq!(bsc.native_currency.decimals, 18);
        assert!(!bsc.testnet);
        assert_eq!(
            bsc.rpc_url().expect("url").as_str(),
            "https://bsc-dataseed1.binance.org/"
        );
        assert_eq!(bsc.to_string(), "BNB Smart Chain (56)");
    }

    #[test]
    fn chain_descriptor_rejects_other_ids() {
        for chain_id in [0, 1, 97, 137, 99999] {
            let err = chain(chain_id).unwrap_err();
            assert_eq!(err.kind(), Kind::Configuration);
            assert!(err.to_string().contains(&chain_id.to_string()));
        }
    }

    #[test]
    fn descriptor_and_address_tables_cover_the_same_chains() {
        for chain_id in SUPPORTED_CHAINS {
            chain(chain_id).expect("missing chain");
            assert!(CONTRACTS.get(&chain_id).is_some(), "{chain_id}");
        }
        assert_eq!(CHAINS.len(), SUPPORTED_CHAINS.len());
        assert_eq!(CONTRACTS.len(), SUPPORTED_CHAINS.len());
    }
}
