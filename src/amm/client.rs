//! Client for the Sybex prediction-market AMM (`SYBEX_AMM_V2`).

#![allow(
    clippy::exhaustive_structs,
    clippy::exhaustive_enums,
    reason = "Alloy sol! macro generates code that triggers these lints"
)]

use alloy::primitives::{B256, FixedBytes, U256};
use alloy::providers::{Provider, WalletProvider};
use alloy::sol;

use super::types::{
    CreateMarketRequest, InitializeRequest, Market, MarketRequest, MarketStatus, OutcomeRequest,
    PlacePositionRequest, PlacePositionWithTokenRequest, QuestionType, RoleRequest,
    SetFeePercentageRequest, SetFeeRecipientRequest, SetOracleRequest, TokenRequest,
    UserPositionRequest,
};
use crate::dispatch::{self, Submission, Target};
use crate::error::Error;
use crate::types::Address;
use crate::validation::validate_question_text;
use crate::{ContractName, Result};

sol! {
    #[sol(rpc)]
    interface ISybexAmmV2 {
        function ADMIN_ROLE() external view returns (bytes32);
        function DEFAULT_ADMIN_ROLE() external view returns (bytes32);

        function getMarket(uint256 marketId) external view returns (
            string question,
            uint8 questionType,
            address token,
            uint8 status,
            uint256 totalPool,
            uint256 totalFees,
            uint256 winningOutcome,
            uint256 deadline,
            address owner
        );
        function getOutcomeLabel(uint256 marketId, uint256 outcomeId) external view returns (string);
        function getOutcomePool(uint256 marketId, uint256 outcomeId) external view returns (uint256);
        function getUserPosition(uint256 marketId, uint256 outcomeId, address user)
            external view returns (uint256);
        function marketCounter() external view returns (uint256);
        function accumulatedFees() external view returns (uint256);
        function feePercentage() external view returns (uint256);
        function feeRecipient() external view returns (address);
        function sybexOracle() external view returns (address);
        function supportedTokens(address token) external view returns (bool);
        function hasRole(bytes32 role, address account) external view returns (bool);
        function getRoleAdmin(bytes32 role) external view returns (bytes32);
        function supportsInterface(bytes4 interfaceId) external view returns (bool);

        function createMarket(
            string question,
            string[] outcomeLabels,
            uint8 questionType,
            address token,
            uint256 deadline
        ) external payable returns (uint256 marketId);
        function placePosition(uint256 marketId, uint256 outcomeId) external payable;
        function placePositionWithToken(
            uint256 marketId,
            uint256 outcomeId,
            uint256 amount,
            address token
        ) external;
        function claimWinnings(uint256 marketId) external;
        function refund(uint256 marketId) external;
        function resolveMarket(uint256 marketId) external;
        function cancelMarket(uint256 marketId) external;

        function setFeePercentage(uint256 newFeePercentage) external;
        function setFeeRecipient(address newFeeRecipient) external;
        function setOracle(address newOracle) external;
        function addSupportedToken(address token) external;
        function removeSupportedToken(address token) external;
        function withdrawFees(address token) external;
        function grantRole(bytes32 role, address account) external;
        function revokeRole(bytes32 role, address account) external;
        function renounceRole(bytes32 role, address callerConfirmation) external;
        function initialize(
            address oracle,
            address feeRecipient,
            uint256 feePercentage,
            address admin
        ) external;
    }
}

type Contract<'a, P> = ISybexAmmV2::ISybexAmmV2Instance<&'a P>;

/// Client for the Sybex AMM.
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

    async fn contract(&self) -> Result<Contract<'_, P>> {
        let address = dispatch::resolve_address(&self.provider, ContractName::AmmV2).await?;
        Ok(ISybexAmmV2::new(address, &self.provider))
    }

    async fn target(&self) -> Result<(Target, Contract<'_, P>)> {
        let target = Target::resolve(&self.provider, self.account, ContractName::AmmV2).await?;
        Ok((target, ISybexAmmV2::new(target.address, &self.provider)))
    }

    /// Fetches a market by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the contract call fails or the market carries an unknown question
    /// type or status.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), fields(market_id = %market_id))
    )]
    pub async fn market(&self, market_id: U256) -> Result<Market> {
        let contract = self.contract().await?;
        let market = dispatch::read(contract.getMarket(market_id)).await?;

        Ok(Market {
            question: market.question,
            question_type: QuestionType::try_from(market.questionType)?,
            token: market.token,
            status: MarketStatus::try_from(market.status)?,
            total_pool: market.totalPool,
            total_fees: market.totalFees,
            winning_outcome: market.winningOutcome,
            deadline: market.deadline,
            owner: market.owner,
        })
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), fields(
            market_id = %request.market_id,
            outcome_id = %request.outcome_id
        ))
    )]
    pub async fn outcome_label(&self, request: &OutcomeRequest) -> Result<String> {
        let contract = self.contract().await?;

        dispatch::read(contract.getOutcomeLabel(request.market_id, request.outcome_id)).await
    }

    /// Total amount placed on one outcome.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), fields(
            market_id = %request.market_id,
            outcome_id = %request.outcome_id
        ))
    )]
    pub async fn outcome_pool(&self, request: &OutcomeRequest) -> Result<U256> {
        let contract = self.contract().await?;

        dispatch::read(contract.getOutcomePool(request.market_id, request.outcome_id)).await
    }

    /// Amount `request.user` has placed on one outcome.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), fields(
            market_id = %request.market_id,
            outcome_id = %request.outcome_id,
            user = %request.user
        ))
    )]
    pub async fn user_position(&self, request: &UserPositionRequest) -> Result<U256> {
        let contract = self.contract().await?;

        dispatch::read(contract.getUserPosition(
            request.market_id,
            request.outcome_id,
            request.user,
        ))
        .await
    }

    /// Number of markets created so far.
    pub async fn market_counter(&self) -> Result<U256> {
        dispatch::read(self.contract().await?.marketCounter()).await
    }

    pub async fn accumulated_fees(&self) -> Result<U256> {
        dispatch::read(self.contract().await?.accumulatedFees()).await
    }

    pub async fn fee_percentage(&self) -> Result<U256> {
        dispatch::read(self.contract().await?.feePercentage()).await
    }

    pub async fn fee_recipient(&self) -> Result<Address> {
        dispatch::read(self.contract().await?.feeRecipient()).await
    }

    /// Address of the oracle markets are resolved against.
    pub async fn oracle(&self) -> Result<Address> {
        dispatch::read(self.contract().await?.sybexOracle()).await
    }

    pub async fn admin_role(&self) -> Result<B256> {
        dispatch::read(self.contract().await?.ADMIN_ROLE()).await
    }

    pub async fn default_admin_role(&self) -> Result<B256> {
        dispatch::read(self.contract().await?.DEFAULT_ADMIN_ROLE()).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn has_role(&self, role: B256, account: Address) -> Result<bool> {
        dispatch::read(self.contract().await?.hasRole(role, account)).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn role_admin(&self, role: B256) -> Result<B256> {
        dispatch::read(self.contract().await?.getRoleAdmin(role)).await
    }

    pub async fn supports_interface(&self, interface_id: FixedBytes<4>) -> Result<bool> {
        dispatch::read(self.contract().await?.supportsInterface(interface_id)).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn is_token_supported(&self, token: Address) -> Result<bool> {
        dispatch::read(self.contract().await?.supportedTokens(token)).await
    }

    /// Creates a market.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The question is empty or longer than 1000 characters
    /// - The deadline is before the unix epoch
    /// - The client has no signing account
    /// - The connected chain is not supported
    /// - The transaction fails to send, or to be mined when waiting for inclusion
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(
            question_type = %request.question_type,
            outcomes = request.outcome_labels.len(),
            token = %request.token,
            deadline = %request.deadline
        ))
    )]
    pub async fn create_market(&self, request: &CreateMarketRequest) -> Result<Submission> {
        validate_question_text(&request.question)?;
        let deadline = u64::try_from(request.deadline.timestamp()).map_err(|e| {
            Error::validation(format!(
                "Deadline {} is before the unix epoch: {e}",
                request.deadline
            ))
        })?;

        let (target, contract) = self.target().await?;
        let call = contract
            .createMarket(
                request.question.clone(),
                request.outcome_labels.clone(),
                request.question_type.into(),
                request.token,
                U256::from(deadline),
            )
            .value(request.value);

        dispatch::send(target.prepare(call), request.wait).await
    }

    /// Places a position paid in native BNB.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(
            market_id = %request.market_id,
            outcome_id = %request.outcome_id,
            value = %request.value
        ))
    )]
    pub async fn place_position(&self, request: &PlacePositionRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;
        let call = contract
            .placePosition(request.market_id, request.outcome_id)
            .value(request.value);

        dispatch::send(target.prepare(call), request.wait).await
    }

    /// Places a position paid in a supported token.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(
            market_id = %request.market_id,
            outcome_id = %request.outcome_id,
            amount = %request.amount,
            token = %request.token
        ))
    )]
    pub async fn place_position_with_token(
        &self,
        request: &PlacePositionWithTokenRequest,
    ) -> Result<Submission> {
        let (target, contract) = self.target().await?;
        let call = contract.placePositionWithToken(
            request.market_id,
            request.outcome_id,
            request.amount,
            request.token,
        );

        dispatch::send(target.prepare(call), request.wait).await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(market_id = %request.market_id))
    )]
    pub async fn claim_winnings(&self, request: &MarketRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(
            target.prepare(contract.claimWinnings(request.market_id)),
            request.wait,
        )
        .await
    }

    /// Returns the sender's positions in a cancelled market.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(market_id = %request.market_id))
    )]
    pub async fn refund(&self, request: &MarketRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(target.prepare(contract.refund(request.market_id)), request.wait).await
    }

    /// Settles a market from the oracle's answer to its question.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(market_id = %request.market_id))
    )]
    pub async fn resolve_market(&self, request: &MarketRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(
            target.prepare(contract.resolveMarket(request.market_id)),
            request.wait,
        )
        .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(market_id = %request.market_id))
    )]
    pub async fn cancel_market(&self, request: &MarketRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(
            target.prepare(contract.cancelMarket(request.market_id)),
            request.wait,
        )
        .await
    }

    pub async fn set_fee_percentage(&self, request: &SetFeePercentageRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(
            target.prepare(contract.setFeePercentage(request.fee_percentage)),
            request.wait,
        )
        .await
    }

    pub async fn set_fee_recipient(&self, request: &SetFeeRecipientRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(
            target.prepare(contract.setFeeRecipient(request.fee_recipient)),
            request.wait,
        )
        .await
    }

    pub async fn set_oracle(&self, request: &SetOracleRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(target.prepare(contract.setOracle(request.oracle)), request.wait).await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(token = %request.token))
    )]
    pub async fn add_supported_token(&self, request: &TokenRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(
            target.prepare(contract.addSupportedToken(request.token)),
            request.wait,
        )
        .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(token = %request.token))
    )]
    pub async fn remove_supported_token(&self, request: &TokenRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(
            target.prepare(contract.removeSupportedToken(request.token)),
            request.wait,
        )
        .await
    }

    /// Sends the fees accumulated in `request.token` to the fee recipient.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(token = %request.token))
    )]
    pub async fn withdraw_fees(&self, request: &TokenRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(target.prepare(contract.withdrawFees(request.token)), request.wait).await
    }

    pub async fn grant_role(&self, request: &RoleRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(
            target.prepare(contract.grantRole(request.role, request.account)),
            request.wait,
        )
        .await
    }

    pub async fn revoke_role(&self, request: &RoleRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(
            target.prepare(contract.revokeRole(request.role, request.account)),
            request.wait,
        )
        .await
    }

    pub async fn renounce_role(&self, request: &RoleRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(
            target.prepare(contract.renounceRole(request.role, request.account)),
            request.wait,
        )
        .await
    }

    /// Initializes a freshly deployed AMM. Reverts if it has already been initialized.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(
            oracle = %request.oracle,
            admin = %request.admin
        ))
    )]
    pub async fn initialize(&self, request: &InitializeRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;
        let call = contract.initialize(
            request.oracle,
            request.fee_recipient,
            request.fee_percentage,
            request.admin,
        );

        dispatch::send(target.prepare(call), request.wait).await
    }
}
