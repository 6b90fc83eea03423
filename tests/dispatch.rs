#![allow(clippy::unwrap_used, reason = "Fine for tests")]

mod common;

use std::time::Duration;

use alloy::sol;
use httpmock::MockServer;
use serde_json::{Value, json};
use sybex_client_sdk::dispatch::{self, Submission, Target, Wait};
use sybex_client_sdk::error::Kind;
use sybex_client_sdk::types::{Address, U256, address};
use sybex_client_sdk::{BSC, ContractName, contract_address};

use crate::common::{ACCOUNT, BSC_CHAIN_ID, TX_HASH};

sol! {
    #[sol(rpc)]
    interface ICounter {
        function count() external view returns (uint256);
        function label(uint256 id) external view returns (string);
        function increment() external;
    }
}

const COUNTER: Address = address!("0x00000000000000000000000000000000c0ffee00");

mod resolution {
    use super::*;

    #[tokio::test]
    async fn chain_id_is_queried_on_every_call() -> anyhow::Result<()> {
        let server = MockServer::start();
        let provider = common::provider(&server).await?;
        let mock = common::chain_id(&server, BSC_CHAIN_ID);

        assert_eq!(sybex_client_sdk::chain_id(&provider).await?, BSC);
        assert_eq!(sybex_client_sdk::chain_id(&provider).await?, BSC);

        mock.assert_calls(2);
        Ok(())
    }

    #[tokio::test]
    async fn target_should_resolve_account_address_and_chain() -> anyhow::Result<()> {
        let server = MockServer::start();
        let provider = common::provider(&server).await?;
        common::chain_id(&server, BSC_CHAIN_ID);

        let target = Target::resolve(&provider, Some(ACCOUNT), ContractName::AmmV2).await?;

        assert_eq!(target.account, ACCOUNT);
        assert_eq!(target.address, contract_address(BSC, ContractName::AmmV2)?);
        assert_eq!(target.chain.id, BSC);
        Ok(())
    }

    #[tokio::test]
    async fn target_without_account_should_fail_before_network() -> anyhow::Result<()> {
        let server = MockServer::start();
        let provider = common::provider(&server).await?;
        let mock = common::chain_id(&server, BSC_CHAIN_ID);

        let err = Target::resolve(&provider, None, ContractName::Oracle)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), Kind::Signer);
        mock.assert_calls(0);
        Ok(())
    }

    #[tokio::test]
    async fn target_on_unsupported_chain_should_name_chain() -> anyhow::Result<()> {
        let server = MockServer::start();
        let provider = common::provider(&server).await?;
        common::chain_id(&server, "0x1");

        let err = Target::resolve(&provider, Some(ACCOUNT), ContractName::Oracle)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), Kind::Configuration);
        assert!(err.to_string().contains("chain id 1"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn transport_failure_should_propagate() -> anyhow::Result<()> {
        let server = MockServer::start();
        let provider = common::provider(&server).await?;
        common::rpc_error(&server, "eth_chainId", "upstream unavailable");

        let err = sybex_client_sdk::chain_id(&provider).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Contract);
        assert!(err.to_string().contains("upstream unavailable"), "{err}");
        Ok(())
    }
}

mod read {
    use super::*;

    #[tokio::test]
    async fn read_returns_stubbed_value_unchanged() -> anyhow::Result<()> {
        let server = MockServer::start();
        let provider = common::provider(&server).await?;
        let mock = common::eth_call(&server, (U256::from(42),));

        let counter = ICounter::new(COUNTER, &provider);
        let count = dispatch::read(counter.count()).await?;

        assert_eq!(count, U256::from(42));
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn read_decodes_dynamic_values() -> anyhow::Result<()> {
        let server = MockServer::start();
        let provider = common::provider(&server).await?;
        common::eth_call(&server, ("Yes".to_owned(),));

        let counter = ICounter::new(COUNTER, &provider);
        let label = dispatch::read(counter.label(U256::ZERO)).await?;

        assert_eq!(label, "Yes");
        Ok(())
    }

    #[tokio::test]
    async fn revert_should_be_contract_error() -> anyhow::Result<()> {
        let server = MockServer::start();
        let provider = common::provider(&server).await?;
        common::rpc_error(&server, "eth_call", "execution reverted");

        let counter = ICounter::new(COUNTER, &provider);
        let err = dispatch::read(counter.count()).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Contract);
        Ok(())
    }

    #[tokio::test]
    async fn simulate_returns_the_would_be_result() -> anyhow::Result<()> {
        let server = MockServer::start();
        let provider = common::provider(&server).await?;
        let call = common::eth_call(&server, (U256::from(8),));
        let send = common::send_transaction(&server);

        let counter = ICounter::new(COUNTER, &provider);
        let count = dispatch::simulate(counter.count().from(ACCOUNT)).await?;

        assert_eq!(count, U256::from(8));
        call.assert();
        send.assert_calls(0);
        Ok(())
    }
}

mod send {
    use super::*;

    #[tokio::test]
    async fn submitted_returns_hash_without_receipt_polling() -> anyhow::Result<()> {
        let server = MockServer::start();
        let provider = common::provider(&server).await?;
        let send = common::send_transaction(&server);
        let receipt = common::rpc(&server, "eth_getTransactionReceipt", common::receipt());

        let counter = ICounter::new(COUNTER, &provider);
        let submission = dispatch::send(counter.increment().from(ACCOUNT), Wait::Submitted).await?;

        assert!(matches!(submission, Submission::Pending(hash) if hash == TX_HASH));
        assert_eq!(submission.transaction_hash(), TX_HASH);
        assert!(submission.receipt().is_none());
        send.assert();
        receipt.assert_calls(0);
        Ok(())
    }

    #[tokio::test]
    async fn included_returns_receipt() -> anyhow::Result<()> {
        let server = MockServer::start();
        let provider = common::provider(&server).await?;
        let send = common::send_transaction(&server);
        let receipt = common::rpc(&server, "eth_getTransactionReceipt", common::receipt());
        common::rpc(&server, "eth_blockNumber", json!("0x10"));
        common::rpc(&server, "eth_getBlockByNumber", Value::Null);

        let counter = ICounter::new(COUNTER, &provider);
        let wait = Wait::included().with_timeout(Duration::from_secs(10));
        let submission = dispatch::send(counter.increment().from(ACCOUNT), wait).await?;

        assert!(submission.is_confirmed());
        assert_eq!(submission.succeeded(), Some(true));
        assert_eq!(submission.transaction_hash(), TX_HASH);
        assert_eq!(submission.block_number(), Some(16));
        assert_eq!(submission.receipt().unwrap().gas_used, 21_000);
        send.assert();
        assert!(receipt.calls() >= 1);
        Ok(())
    }

    #[tokio::test]
    async fn included_timeout_should_be_contract_error() -> anyhow::Result<()> {
        let server = MockServer::start();
        let provider = common::provider(&server).await?;
        let send = common::send_transaction(&server);
        common::rpc(&server, "eth_getTransactionReceipt", Value::Null);
        common::rpc(&server, "eth_blockNumber", json!("0x10"));
        common::rpc(&server, "eth_getBlockByNumber", Value::Null);

        let counter = ICounter::new(COUNTER, &provider);
        let wait = Wait::included().with_timeout(Duration::from_secs(1));
        let err = dispatch::send(counter.increment().from(ACCOUNT), wait)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), Kind::Contract);
        assert!(err.to_string().contains("timeout"), "{err}");
        send.assert();
        Ok(())
    }

    #[tokio::test]
    async fn reverted_receipt_is_confirmed_but_not_successful() -> anyhow::Result<()> {
        let server = MockServer::start();
        let provider = common::provider(&server).await?;
        common::send_transaction(&server);
        let mut reverted = common::receipt();
        reverted["status"] = json!("0x0");
        common::rpc(&server, "eth_getTransactionReceipt", reverted);
        common::rpc(&server, "eth_blockNumber", json!("0x10"));
        common::rpc(&server, "eth_getBlockByNumber", Value::Null);

        let counter = ICounter::new(COUNTER, &provider);
        let wait = Wait::included().with_timeout(Duration::from_secs(10));
        let submission = dispatch::send(counter.increment().from(ACCOUNT), wait).await?;

        assert!(submission.is_confirmed());
        assert_eq!(submission.succeeded(), Some(false));
        Ok(())
    }

    #[tokio::test]
    async fn rejected_submission_should_be_contract_error() -> anyhow::Result<()> {
        let server = MockServer::start();
        let provider = common::provider(&server).await?;
        common::rpc_error(&server, "eth_sendTransaction", "insufficient funds for gas");
        let receipt = common::rpc(&server, "eth_getTransactionReceipt", common::receipt());

        let counter = ICounter::new(COUNTER, &provider);
        let err = dispatch::send(counter.increment().from(ACCOUNT), Wait::included())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), Kind::Contract);
        assert!(err.to_string().contains("insufficient funds"), "{err}");
        receipt.assert_calls(0);
        Ok(())
    }

    #[tokio::test]
    async fn prepared_call_carries_sender_and_chain_id() -> anyhow::Result<()> {
        let server = MockServer::start();
        let provider = common::provider(&server).await?;
        common::chain_id(&server, BSC_CHAIN_ID);
        let send = server.mock(|when, then| {
            when.method(httpmock::Method::POST)
                .path("/")
                .body_includes("\"method\":\"eth_sendTransaction\"")
                .body_includes("\"chainId\":\"0x38\"");
            then.status(200).json_body(json!({
                "jsonrpc": "2.0",
                "id": 0,
                "result": TX_HASH
            }));
        });

        let target = Target::resolve(&provider, Some(ACCOUNT), ContractName::Oracle).await?;
        let counter = ICounter::new(target.address, &provider);
        dispatch::send(target.prepare(counter.increment()), Wait::Submitted).await?;

        send.assert();
        Ok(())
    }
}
