//! The two dashboard operations: fetch the signer's reward balance and
//! withdraw it
//!
//! Each call opens a fresh contract handle and performs exactly one
//! round trip. No retry, no timeout; failures surface unchanged.

use crate::client::{RewardContract, SignerIdentity, TxOutcome};
use crate::taiko;
use alloy::signers::local::PrivateKeySigner;
use alloy_primitives::{Address, U256};
use dashboard_core::Result;

/// Read the signer's own reward balance through `contract`
pub async fn fetch_reward_balance_from<S, C>(signer: &S, contract: &C) -> Result<U256>
where
    S: SignerIdentity,
    C: RewardContract,
{
    let account = signer.address().await?;
    contract.get_reward_balance(account).await
}

/// Submit a withdrawal of the signer's full balance through `contract`
pub async fn withdraw_balance_from<C>(contract: &C) -> Result<TxOutcome>
where
    C: RewardContract,
{
    contract.withdraw_balance().await
}

/// Fetch the reward balance of `signer` from the TaikoL1 contract at
/// `token_address`
pub async fn fetch_reward_balance(
    signer: &PrivateKeySigner,
    token_address: Address,
    rpc_url: &str,
) -> Result<U256> {
    let contract = taiko::connect(signer.clone(), token_address, rpc_url)?;
    fetch_reward_balance_from(signer, &contract).await
}

/// Withdraw the full reward balance of `signer` from the TaikoL1
/// contract at `token_address`. Not safe to retry blindly: a resubmitted
/// withdrawal may be rejected or duplicated by the contract.
pub async fn withdraw_balance(
    signer: &PrivateKeySigner,
    token_address: Address,
    rpc_url: &str,
) -> Result<TxOutcome> {
    let contract = taiko::connect(signer.clone(), token_address, rpc_url)?;
    withdraw_balance_from(&contract).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, B256};
    use async_trait::async_trait;
    use dashboard_core::DashboardError;
    use std::sync::Mutex;

    const ACCOUNT: Address = address!("00000000000000000000000000000000000000aa");

    struct StubSigner {
        account: Address,
    }

    #[async_trait]
    impl SignerIdentity for StubSigner {
        async fn address(&self) -> Result<Address> {
            Ok(self.account)
        }
    }

    struct StubContract {
        balance: U256,
        outcome: TxOutcome,
        revert: Option<String>,
        read_calls: Mutex<Vec<Address>>,
        write_calls: Mutex<u32>,
    }

    impl StubContract {
        fn new(balance: U256) -> Self {
            Self {
                balance,
                outcome: TxOutcome {
                    tx_hash: B256::with_last_byte(1),
                    block_number: Some(100),
                    success: true,
                },
                revert: None,
                read_calls: Mutex::new(Vec::new()),
                write_calls: Mutex::new(0),
            }
        }

        fn reverting(reason: &str) -> Self {
            let mut stub = Self::new(U256::ZERO);
            stub.revert = Some(reason.to_string());
            stub
        }
    }

    #[async_trait]
    impl RewardContract for StubContract {
        async fn get_reward_balance(&self, account: Address) -> Result<U256> {
            self.read_calls.lock().unwrap().push(account);
            match &self.revert {
                Some(reason) => Err(DashboardError::ContractRevert(reason.clone())),
                None => Ok(self.balance),
            }
        }

        async fn withdraw_balance(&self) -> Result<TxOutcome> {
            *self.write_calls.lock().unwrap() += 1;
            match &self.revert {
                Some(reason) => Err(DashboardError::ContractRevert(reason.clone())),
                None => Ok(self.outcome.clone()),
            }
        }
    }

    #[tokio::test]
    async fn test_fetch_passes_signer_address_and_returns_balance_unchanged() {
        let signer = StubSigner { account: ACCOUNT };
        let contract = StubContract::new(U256::from(1000));

        let balance = fetch_reward_balance_from(&signer, &contract)
            .await
            .unwrap();

        assert_eq!(balance, U256::from(1000));
        // Exactly one read call, argument equal to the signer's address
        assert_eq!(*contract.read_calls.lock().unwrap(), vec![ACCOUNT]);
        assert_eq!(*contract.write_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_withdraw_issues_one_call_and_returns_outcome_unchanged() {
        let contract = StubContract::new(U256::from(1000));

        let outcome = withdraw_balance_from(&contract).await.unwrap();

        assert_eq!(outcome, contract.outcome);
        assert_eq!(*contract.write_calls.lock().unwrap(), 1);
        assert!(contract.read_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_propagates_revert_unmodified() {
        let signer = StubSigner { account: ACCOUNT };
        let contract = StubContract::reverting("insufficient balance");

        let err = fetch_reward_balance_from(&signer, &contract)
            .await
            .unwrap_err();

        match err {
            DashboardError::ContractRevert(reason) => {
                assert_eq!(reason, "insufficient balance")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_withdraw_propagates_revert_unmodified() {
        let contract = StubContract::reverting("insufficient balance");

        let err = withdraw_balance_from(&contract).await.unwrap_err();

        match err {
            DashboardError::ContractRevert(reason) => {
                assert_eq!(reason, "insufficient balance")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_signer_failure_short_circuits_before_contract_call() {
        struct RefusingSigner;

        #[async_trait]
        impl SignerIdentity for RefusingSigner {
            async fn address(&self) -> Result<Address> {
                Err(DashboardError::Signer("user rejected".to_string()))
            }
        }

        let contract = StubContract::new(U256::from(1));
        let err = fetch_reward_balance_from(&RefusingSigner, &contract)
            .await
            .unwrap_err();

        assert!(matches!(err, DashboardError::Signer(_)));
        assert!(contract.read_calls.lock().unwrap().is_empty());
    }
}
