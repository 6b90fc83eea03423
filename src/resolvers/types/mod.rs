//! Types for resolver operations.

mod request;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

pub use request::{
    ResolveBinaryRequest, ResolveCategoricalRequest, ResolveNumericalRequest,
    ResolveRangeNumericalRequest,
};

use crate::ContractName;
pub use crate::types::RoleRequest;

/// Which resolver contract an operation targets.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResolverKind {
    Binary,
    Categorical,
    Numerical,
    RangeNumerical,
}

impl ResolverKind {
    pub const ALL: [ResolverKind; 4] = [
        ResolverKind::Binary,
        ResolverKind::Categorical,
        ResolverKind::Numerical,
        ResolverKind::RangeNumerical,
    ];

    #[must_use]
    pub const fn contract(self) -> ContractName {
        match self {
            Self::Binary => ContractName::BinaryResolver,
            Self::Categorical => ContractName::CategoricalResolver,
            Self::Numerical => ContractName::NumericalResolver,
            Self::RangeNumerical => ContractName::RangeNumericalResolver,
        }
    }
}
