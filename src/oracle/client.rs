//! Client for the Sybex oracle contract (`SYBEX_ORACLE`).
//!
//! Every call resolves the contract address from the network the provider is connected to,
//! so the same client works against any chain in [`SUPPORTED_CHAINS`](crate::SUPPORTED_CHAINS).
//!
//! # Example
//!
//! ```no_run
//! use sybex_client_sdk::oracle::Client;
//! use alloy::providers::ProviderBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = ProviderBuilder::new()
//!     .connect("https://bsc-dataseed1.binance.org/")
//!     .await?;
//!
//! let client = Client::new(provider);
//! println!("{} questions asked so far", client.question_count().await?);
//! # Ok(())
//! # }
//! ```

#![allow(
    clippy::exhaustive_structs,
    clippy::exhaustive_enums,
    reason = "Alloy sol! macro generates code that triggers these lints"
)]

use alloy::primitives::{B256, FixedBytes, U256};
use alloy::providers::{Provider, WalletProvider};
use alloy::sol;

use super::types::{
    Answer, AnswerRecord, AskRequest, ProvideAnswerRequest, Question, QuestionType,
    ResolverRequest, RoleRequest, SetFeeRecipientRequest, SetFeeRequest,
};
use crate::dispatch::{self, Submission, Target};
use crate::types::Address;
use crate::validation::{validate_question_text, validate_timeout};
use crate::{ContractName, Result};

sol! {
    #[sol(rpc)]
    interface ISybexOracle {
        function ADMIN_ROLE() external view returns (bytes32);
        function DEFAULT_ADMIN_ROLE() external view returns (bytes32);
        function RESOLVER_ROLE() external view returns (bytes32);
        function FEE_DENOMINATOR() external view returns (uint256);
        function REFUND_PERIOD() external view returns (uint256);

        function questions(uint256 questionId) external view returns (
            uint8 questionType,
            string questionText,
            uint256 timeout,
            bytes additionalData,
            address asker,
            bool isResolved,
            uint256 createdAt
        );
        function answers(uint256 questionId) external view returns (
            bytes answerData,
            address resolver,
            uint256 answeredAt
        );
        function getAnswer(uint256 questionId) external view returns (
            bytes answerData,
            address resolver
        );

        function fee() external view returns (uint256);
        function feeRecipient() external view returns (address);
        function questionCount() external view returns (uint256);
        function isResolver(address resolver) external view returns (bool);
        function hasRole(bytes32 role, address account) external view returns (bool);
        function getRoleAdmin(bytes32 role) external view returns (bytes32);
        function maxQuestionLength() external view returns (uint256);
        function minQuestionLength() external view returns (uint256);
        function maxTimeout() external view returns (uint256);
        function minTimeout() external view returns (uint256);
        function supportsInterface(bytes4 interfaceId) external view returns (bool);

        function ask(
            uint8 questionType,
            string questionText,
            uint256 timeout,
            bytes additionalData
        ) external payable returns (uint256 questionId);
        function askBoolean(string questionText, uint256 timeout, bytes additionalData)
            external payable returns (uint256 questionId);
        function askCategorical(string questionText, uint256 timeout, bytes additionalData)
            external payable returns (uint256 questionId);
        function askNumeric(string questionText, uint256 timeout, bytes additionalData)
            external payable returns (uint256 questionId);
        function askRangeNumeric(string questionText, uint256 timeout, bytes additionalData)
            external payable returns (uint256 questionId);

        function provideAnswer(uint256 questionId, bytes answerData) external;
        function addResolver(address resolver) external;
        function removeResolver(address resolver) external;
        function setFee(uint256 newFee) external;
        function setFeeRecipient(address newFeeRecipient) external;
        function grantRole(bytes32 role, address account) external;
        function revokeRole(bytes32 role, address account) external;
        function renounceRole(bytes32 role, address callerConfirmation) external;
    }
}

type Contract<'a, P> = ISybexOracle::ISybexOracleInstance<&'a P>;

/// Client for the Sybex oracle.
///
/// Reads work with any provider. Writes additionally need a signing account, set with
/// [`Client::with_account`] or taken from a wallet-backed provider by [`Client::from_wallet`].
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct Client<P: Provider> {
    provider: P,
    account: Option<Address>,
}

impl<P: Provider> Client<P> {
    /// Creates a read-only client.
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

    /// Sets the account transactions are sent from. The provider must be able to sign for it.
    #[must_use]
    pub const fn with_account(mut self, account: Address) -> Self {
        self.account = Some(account);
        self
    }

    #[must_use]
    pub const fn account(&self) -> Option<Address> {
        self.account
    }

    /// Returns a reference to the underlying provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    async fn contract(&self) -> Result<Contract<'_, P>> {
        let address = dispatch::resolve_address(&self.provider, ContractName::Oracle).await?;
        Ok(ISybexOracle::new(address, &self.provider))
    }

    async fn target(&self) -> Result<(Target, Contract<'_, P>)> {
        let target = Target::resolve(&self.provider, self.account, ContractName::Oracle).await?;
        Ok((target, ISybexOracle::new(target.address, &self.provider)))
    }

    /// Fetches a question by id.
    ///
    /// A question id that was never asked reads back as an empty question; see
    /// [`Question::exists`].
    ///
    /// # Errors
    ///
    /// Returns an error if the contract call fails or the stored question type is unknown.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), fields(question_id = %question_id))
    )]
    pub async fn question(&self, question_id: U256) -> Result<Question> {
        let contract = self.contract().await?;
        let question = dispatch::read(contract.questions(question_id)).await?;

        Ok(Question {
            question_type: QuestionType::try_from(question.questionType)?,
            question_text: question.questionText,
            timeout: question.timeout,
            additional_data: question.additionalData,
            asker: question.asker,
            is_resolved: question.isResolved,
            created_at: question.createdAt,
        })
    }

    /// Fetches the answer data and resolver for a question.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), fields(question_id = %question_id))
    )]
    pub async fn answer(&self, question_id: U256) -> Result<Answer> {
        let contract = self.contract().await?;
        let answer = dispatch::read(contract.getAnswer(question_id)).await?;

        Ok(Answer {
            answer_data: answer.answerData,
            resolver: answer.resolver,
        })
    }

    /// Fetches the full stored answer entry, including when it was given.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), fields(question_id = %question_id))
    )]
    pub async fn answer_record(&self, question_id: U256) -> Result<AnswerRecord> {
        let contract = self.contract().await?;
        let record = dispatch::read(contract.answers(question_id)).await?;

        Ok(AnswerRecord {
            answer_data: record.answerData,
            resolver: record.resolver,
            answered_at: record.answeredAt,
        })
    }

    /// Current fee, in wei, for asking a question.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn fee(&self) -> Result<U256> {
        dispatch::read(self.contract().await?.fee()).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn question_count(&self) -> Result<U256> {
        dispatch::read(self.contract().await?.questionCount()).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn fee_recipient(&self) -> Result<Address> {
        dispatch::read(self.contract().await?.feeRecipient()).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn is_resolver(&self, resolver: Address) -> Result<bool> {
        dispatch::read(self.contract().await?.isResolver(resolver)).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn has_role(&self, role: B256, account: Address) -> Result<bool> {
        dispatch::read(self.contract().await?.hasRole(role, account)).await
    }

    /// Role that administers `role`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn role_admin(&self, role: B256) -> Result<B256> {
        dispatch::read(self.contract().await?.getRoleAdmin(role)).await
    }

    pub async fn max_question_length(&self) -> Result<U256> {
        dispatch::read(self.contract().await?.maxQuestionLength()).await
    }

    pub async fn min_question_length(&self) -> Result<U256> {
        dispatch::read(self.contract().await?.minQuestionLength()).await
    }

    pub async fn max_timeout(&self) -> Result<U256> {
        dispatch::read(self.contract().await?.maxTimeout()).await
    }

    pub async fn min_timeout(&self) -> Result<U256> {
        dispatch::read(self.contract().await?.minTimeout()).await
    }

    pub async fn fee_denominator(&self) -> Result<U256> {
        dispatch::read(self.contract().await?.FEE_DENOMINATOR()).await
    }

    /// Seconds after expiry during which an unanswered question can be refunded.
    pub async fn refund_period(&self) -> Result<U256> {
        dispatch::read(self.contract().await?.REFUND_PERIOD()).await
    }

    pub async fn admin_role(&self) -> Result<B256> {
        dispatch::read(self.contract().await?.ADMIN_ROLE()).await
    }

    pub async fn default_admin_role(&self) -> Result<B256> {
        dispatch::read(self.contract().await?.DEFAULT_ADMIN_ROLE()).await
    }

    pub async fn resolver_role(&self) -> Result<B256> {
        dispatch::read(self.contract().await?.RESOLVER_ROLE()).await
    }

    /// ERC-165 interface detection.
    pub async fn supports_interface(&self, interface_id: FixedBytes<4>) -> Result<bool> {
        dispatch::read(self.contract().await?.supportsInterface(interface_id)).await
    }

    /// Asks a question of the given type.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The question text is empty or longer than 1000 characters
    /// - The timeout is zero or longer than 30 days
    /// - The client has no signing account
    /// - The connected chain is not supported
    /// - The transaction fails to send, or to be mined when waiting for inclusion
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(
            question_type = %question_type,
            timeout = request.timeout,
            value = %request.value
        ))
    )]
    pub async fn ask(&self, question_type: QuestionType, request: &AskRequest) -> Result<Submission> {
        Self::validate_ask(request)?;

        let (target, contract) = self.target().await?;
        let call = contract
            .ask(
                question_type.into(),
                request.question_text.clone(),
                U256::from(request.timeout),
                request.additional_data.clone(),
            )
            .value(request.value);

        dispatch::send(target.prepare(call), request.wait).await
    }

    /// Asks a yes/no question.
    ///
    /// # Errors
    ///
    /// See [`Client::ask`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(timeout = request.timeout))
    )]
    pub async fn ask_boolean(&self, request: &AskRequest) -> Result<Submission> {
        Self::validate_ask(request)?;

        let (target, contract) = self.target().await?;
        let call = contract
            .askBoolean(
                request.question_text.clone(),
                U256::from(request.timeout),
                request.additional_data.clone(),
            )
            .value(request.value);

        dispatch::send(target.prepare(call), request.wait).await
    }

    /// Asks a question whose answer is a single number.
    ///
    /// # Errors
    ///
    /// See [`Client::ask`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(timeout = request.timeout))
    )]
    pub async fn ask_numeric(&self, request: &AskRequest) -> Result<Submission> {
        Self::validate_ask(request)?;

        let (target, contract) = self.target().await?;
        let call = contract
            .askNumeric(
                request.question_text.clone(),
                U256::from(request.timeout),
                request.additional_data.clone(),
            )
            .value(request.value);

        dispatch::send(target.prepare(call), request.wait).await
    }

    /// Asks a question whose answer is one of a fixed set of categories, usually listed in
    /// [`AskRequest::additional_data`].
    ///
    /// # Errors
    ///
    /// See [`Client::ask`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(timeout = request.timeout))
    )]
    pub async fn ask_categorical(&self, request: &AskRequest) -> Result<Submission> {
        Self::validate_ask(request)?;

        let (target, contract) = self.target().await?;
        let call = contract
            .askCategorical(
                request.question_text.clone(),
                U256::from(request.timeout),
                request.additional_data.clone(),
            )
            .value(request.value);

        dispatch::send(target.prepare(call), request.wait).await
    }

    /// Asks a question whose answer is a numeric range.
    ///
    /// # Errors
    ///
    /// See [`Client::ask`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(timeout = request.timeout))
    )]
    pub async fn ask_range_numeric(&self, request: &AskRequest) -> Result<Submission> {
        Self::validate_ask(request)?;

        let (target, contract) = self.target().await?;
        let call = contract
            .askRangeNumeric(
                request.question_text.clone(),
                U256::from(request.timeout),
                request.additional_data.clone(),
            )
            .value(request.value);

        dispatch::send(target.prepare(call), request.wait).await
    }

    /// Dry-runs [`Client::ask`] and returns the question id it would be assigned.
    ///
    /// The sender is included when the client has an account, so the simulation sees the
    /// same fee checks as the real transaction.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(question_type = %question_type))
    )]
    pub async fn simulate_ask(
        &self,
        question_type: QuestionType,
        request: &AskRequest,
    ) -> Result<U256> {
        Self::validate_ask(request)?;

        let contract = self.contract().await?;
        let mut call = contract
            .ask(
                question_type.into(),
                request.question_text.clone(),
                U256::from(request.timeout),
                request.additional_data.clone(),
            )
            .value(request.value);
        if let Some(account) = self.account {
            call = call.from(account);
        }

        dispatch::simulate(call).await
    }

    /// Answers a question. The sender must hold the resolver role.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(question_id = %request.question_id))
    )]
    pub async fn provide_answer(&self, request: &ProvideAnswerRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;
        let call = contract.provideAnswer(request.question_id, request.answer_data.clone());

        dispatch::send(target.prepare(call), request.wait).await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(resolver = %request.resolver))
    )]
    pub async fn add_resolver(&self, request: &ResolverRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(target.prepare(contract.addResolver(request.resolver)), request.wait).await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(resolver = %request.resolver))
    )]
    pub async fn remove_resolver(&self, request: &ResolverRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(
            target.prepare(contract.removeResolver(request.resolver)),
            request.wait,
        )
        .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(fee = %request.fee))
    )]
    pub async fn set_fee(&self, request: &SetFeeRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(target.prepare(contract.setFee(request.fee)), request.wait).await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(fee_recipient = %request.fee_recipient))
    )]
    pub async fn set_fee_recipient(&self, request: &SetFeeRecipientRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(
            target.prepare(contract.setFeeRecipient(request.fee_recipient)),
            request.wait,
        )
        .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(role = %request.role, account = %request.account))
    )]
    pub async fn grant_role(&self, request: &RoleRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

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
    pub async fn revoke_role(&self, request: &RoleRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(
            target.prepare(contract.revokeRole(request.role, request.account)),
            request.wait,
        )
        .await
    }

    /// Gives up `request.role` for the sender, which must equal `request.account`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, request), fields(role = %request.role))
    )]
    pub async fn renounce_role(&self, request: &RoleRequest) -> Result<Submission> {
        let (target, contract) = self.target().await?;

        dispatch::send(
            target.prepare(contract.renounceRole(request.role, request.account)),
            request.wait,
        )
        .await
    }

    fn validate_ask(request: &AskRequest) -> Result<()> {
        validate_question_text(&request.question_text)?;
        validate_timeout(request.timeout)
    }
}
