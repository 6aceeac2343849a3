//! Alloy-backed client for the TaikoL1 reward surface

use crate::bindings::TaikoL1;
use crate::client::{RewardContract, TxOutcome};
use alloy::network::EthereumWallet;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use dashboard_core::{DashboardError, Result};
use tracing::debug;

/// Transient handle binding {address, ABI, signer}; built fresh per call
/// and discarded afterwards, mirroring the dashboard's usage
pub struct TaikoL1Client<P: Provider> {
    instance: TaikoL1::TaikoL1Instance<P>,
}

/// Open a client bound to `token_address` over a signer-backed HTTP
/// provider. The connection is not cached or reused.
pub fn connect(
    signer: PrivateKeySigner,
    token_address: Address,
    rpc_url: &str,
) -> Result<TaikoL1Client<impl Provider + Clone + 'static>> {
    let url: reqwest::Url = rpc_url
        .parse()
        .map_err(|e| DashboardError::Rpc(format!("Invalid RPC URL: {}", e)))?;

    let wallet = EthereumWallet::from(signer);
    let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);

    Ok(TaikoL1Client::new(token_address, provider))
}

impl<P: Provider> TaikoL1Client<P> {
    pub fn new(token_address: Address, provider: P) -> Self {
        Self {
            instance: TaikoL1::new(token_address, provider),
        }
    }

    /// Address of the bound contract
    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

#[async_trait]
impl<P: Provider + 'static> RewardContract for TaikoL1Client<P> {
    async fn get_reward_balance(&self, account: Address) -> Result<U256> {
        debug!(account = ?account, contract = ?self.address(), "getRewardBalance call");

        self.instance
            .getRewardBalance(account)
            .call()
            .await
            .map_err(map_contract_error)
    }

    async fn withdraw_balance(&self) -> Result<TxOutcome> {
        debug!(contract = ?self.address(), "withdrawBalance transaction");

        let receipt = self
            .instance
            .withdrawBalance()
            .send()
            .await
            .map_err(map_contract_error)?
            .get_receipt()
            .await
            .map_err(|e| DashboardError::Rpc(e.to_string()))?;

        Ok(TxOutcome {
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            success: receipt.status(),
        })
    }
}

/// A JSON-RPC error response carries the node's revert; everything else
/// is a transport-level failure
fn map_contract_error(err: alloy::contract::Error) -> DashboardError {
    match &err {
        alloy::contract::Error::TransportError(rpc_err) if rpc_err.is_error_resp() => {
            DashboardError::ContractRevert(err.to_string())
        }
        _ => DashboardError::Rpc(err.to_string()),
    }
}
