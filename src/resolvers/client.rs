#![allow(
    clippy::exhaustive_structs,
    clippy::exhaustive_enums,
    reason = "Alloy sol! macro generates code that triggers these lints"
)]

use alloy::primitives::B256;
use alloy::providers::{Provider, WalletProvider};
use alloy::sol;

use super::types::{
    ResolveBinaryRequest, ResolveCategoricalRequest, ResolveNumericalRequest,
    ResolveRangeNumericalRequest, ResolverKind, RoleRequest,
};
use crate::Result;
use crate::dispatch::{self, Submission, Target};
use crate::types::Address;
use crate::validation::{validate_binary_outcome, validate_category_index, validate_range};

// Each resolver checks the shape of its answer, records the proof, and forwards the encoded
// answer to the oracle. All four share OpenZeppelin `AccessControl` for the resolver role.
sol! {
    #[sol(rpc)]
    interface IBinaryResolver {
        function resolve(uint256 questionId, uint8 outcome, string proof) external;
    }

    #[sol(rpc)]
    interface ICategoricalResolver {
        function resolve(uint256 questionId, uint8 categoryIndex, string proof) external;
    }

    #[sol(rpc)]
    interface INumericalResolver {
        function resolve(uint256 questionId, int256 answer, string proof) external;
    }

    #[sol(rpc)]
    interface IRangeNumericalResolver {
        function resolve(
            uint256 questionId,
            int256 lowerBound,
            int256 upperBound,
            string proof
        ) external;
    }

    #[sol(rpc)]
    interface IAccessControl {
        function hasRole(bytes32 role, address account) external view returns (bool);
        function getRoleAdmin(bytes32 role) external view returns (bytes32);
        function grantRole(bytes32 role, address account) external;
        function revokeRole(bytes32 role, address account) external;
        function renounceRole(bytes32 role, address callerConfirmation) external;
    }
}

/// Client for the four Sybex resolver contracts.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct Client<P: Provider> {
    provider: P,
    account: Option<Address>,
}

impl<P: Provider> Client<P> {
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self {
            provider,
            account: None,
        }
    }

    /// Creates a client that signs with the provider's default wallet signer.
    #[must_use]
    pub fn from_wallet(provider: P) -> Self
    where
        P: WalletProvider,
    {
        let account = provider.default_signer_address();
        Self::new(provider).with_account(account)
    }

    #[must_use]
    pub const fn with_account(mut self, account: Address) -> Self {
        self.account = Some(account);
        self
    }

    #[must_use]
    pub const fn account(&self) -> Option<Address> {
        self.account
    }

    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    async fn target(&self, kind: ResolverKind) -> Result<Target> {
        Target::resolve(&self.provider, self.account, kind.contract()).await
    }

    /// Resolves a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The outcome is not `0` or `1`
    /// - The client has no signing account
    /// - The connected chain is not supported
    /// - The transaction fails to send, or to be mined when waiting for inclusion
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(
            question_id = %request.question_id,
            outcome = request.outcome
        ))
    )]
    pub async fn resolve_binary(&self, request: &ResolveBinaryRequest) -> Result<Submission> {
        let outcome = validate_binary_outcome(request.outcome)?;

        let target = self.target(ResolverKind::Binary).await?;
        let contract = IBinaryResolver::new(target.address, &self.provider);
        let call = contract.resolve(request.question_id, outcome, request.proof.clone());

        dispatch::send(target.prepare(call), request.wait).await
    }

    /// Resolves a categorical question.
    ///
    /// # Errors
    ///
    /// Same as [`Client::resolve_binary`], with the category index required to fit in `0..=255`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(
            question_id = %request.question_id,
            category_index = request.category_index
        ))
    )]
    pub async fn resolve_categorical(
        &self,
        request: &ResolveCategoricalRequest,
    ) -> Result<Submission> {
        let category_index = validate_category_index(request.category_index)?;

        let target = self.target(ResolverKind::Categorical).await?;
        let contract = ICategoricalResolver::new(target.address, &self.provider);
        let call = contract.resolve(request.question_id, category_index, request.proof.clone());

        dispatch::send(target.prepare(call), request.wait).await
    }

    /// Resolves a numeric question. Any signed 256-bit answer is accepted.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(
            question_id = %request.question_id,
            answer = %request.answer
        ))
    )]
    pub async fn resolve_numerical(&self, request: &ResolveNumericalRequest) -> Result<Submission> {
        let target = self.target(ResolverKind::Numerical).await?;
        let contract = INumericalResolver::new(target.address, &self.provider);
        let call = contract.resolve(request.question_id, request.answer, request.proof.clone());

        dispatch::send(target.prepare(call), request.wait).await
    }

    /// Resolves a range question.
    ///
    /// # Errors
    ///
    /// Same as [`Client::resolve_binary`], with `lower_bound < upper_bound` required.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(
            question_id = %request.question_id,
            lower_bound = %request.lower_bound,
            upper_bound = %request.upper_bound
        ))
    )]
    pub async fn resolve_range_numerical(
        &self,
        request: &ResolveRangeNumericalRequest,
    ) -> Result<Submission> {
        validate_range(request.lower_bound, request.upper_bound)?;

        let target = self.target(ResolverKind::RangeNumerical).await?;
        let contract = IRangeNumericalResolver::new(target.address, &self.provider);
        let call = contract.resolve(
            request.question_id,
            request.lower_bound,
            request.upper_bound,
            request.proof.clone(),
        );

        dispatch::send(target.prepare(call), request.wait).await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(role = %request.role, account = %request.account))
    )]
    pub async fn grant_role(&self, kind: ResolverKind, request: &RoleRequest) -> Result<Submission> {
        let target = self.target(kind).await?;
        let contract = IAccessControl::new(target.address, &self.provider);

        dispatch::send(
            target.prepare(contract.grantRole(request.role, request.account)),
            request.wait,
        )
        .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(role = %request.role, account = %request.account))
    )]
    pub async fn revoke_role(&self, kind: ResolverKind, request: &RoleRequest) -> Result<Submission> {
        let target = self.target(kind).await?;
        let contract = IAccessControl::new(target.address, &self.provider);

        dispatch::send(
            target.prepare(contract.revokeRole(request.role, request.account)),
            request.wait,
        )
        .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self))
    )]
    pub async fn has_role(&self, kind: ResolverKind, role: B256, account: Address) -> Result<bool> {
        let address = dispatch::resolve_address(&self.provider, kind.contract()).await?;
        let contract = IAccessControl::new(address, &self.provider);

        dispatch::read(contract.hasRole(role, account)).await
    }

    pub async fn role_admin(&self, kind: ResolverKind, role: B256) -> Result<B256> {
        let address = dispatch::resolve_address(&self.provider, kind.contract()).await?;
        let contract = IAccessControl::new(address, &self.provider);

        dispatch::read(contract.getRoleAdmin(role)).await
    }

    /// Gives up `request.role` on the `kind` resolver for the sender, which must equal
    /// `request.account`.
    pub async fn renounce_role(
        &self,
        kind: ResolverKind,
        request: &RoleRequest,
    ) -> Result<Submission> {
        let target = self.target(kind).await?;
        let contract = IAccessControl::new(target.address, &self.provider);

        dispatch::send(
            target.prepare(contract.renounceRole(request.role, request.account)),
            request.wait,
        )
        .await
    }
}
