//! Capability traits for contract calls and signer identity
//!
//! The wrapper operations depend only on these traits, so tests can
//! substitute stubs for the live alloy-backed client.

use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;
use dashboard_core::Result;

/// Result of a state-changing contract call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutcome {
    pub tx_hash: B256,
    pub block_number: Option<u64>,
    /// Execution status from the receipt
    pub success: bool,
}

/// One explicit method per contract entry point the dashboard uses
#[async_trait]
pub trait RewardContract: Send + Sync {
    /// Read-only `getRewardBalance(address)` call
    async fn get_reward_balance(&self, account: Address) -> Result<U256>;

    /// State-changing `withdrawBalance()` call, authorized by the
    /// client's signer; takes no explicit arguments
    async fn withdraw_balance(&self) -> Result<TxOutcome>;
}

/// Ability to resolve one's own account address
#[async_trait]
pub trait SignerIdentity: Send + Sync {
    async fn address(&self) -> Result<Address>;
}

#[async_trait]
impl SignerIdentity for alloy::signers::local::PrivateKeySigner {
    async fn address(&self) -> Result<Address> {
        Ok(alloy::signers::Signer::address(self))
    }
}
