use crate::error::{DashboardError, Result};
use alloy_primitives::Address;
use std::env;

/// Runtime configuration from environment variables
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// HTTP JSON-RPC endpoint of the L1 node
    pub rpc_url: String,
    /// Address of the deployed TaikoL1 contract
    pub token_address: Address,
    /// Hex-encoded private key for the dashboard signer
    pub private_key: String,
    /// When true, the demo binary withdraws the balance after fetching it
    pub withdraw: bool,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self> {
        let rpc_url = env::var("RPC_URL")
            .map(|url| sanitize_url(&url))
            .map_err(|_| DashboardError::MissingEnvVar("RPC_URL".to_string()))?;

        let token_address = env::var("TOKEN_ADDRESS")
            .map_err(|_| DashboardError::MissingEnvVar("TOKEN_ADDRESS".to_string()))?
            .parse()
            .map_err(|_| DashboardError::InvalidAddress("TOKEN_ADDRESS".to_string()))?;

        let private_key = env::var("PRIVATE_KEY")
            .map_err(|_| DashboardError::MissingEnvVar("PRIVATE_KEY".to_string()))?;

        let withdraw = env::var("WITHDRAW")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        Ok(Self {
            rpc_url,
            token_address,
            private_key,
            withdraw,
        })
    }
}

/// Strip whitespace and surrounding quotes that sneak in via .env files
fn sanitize_url(url: &str) -> String {
    let trimmed = url.trim();
    let without_quotes = if trimmed.starts_with('"') && trimmed.ends_with('"') {
        &trimmed[1..trimmed.len() - 1]
    } else if trimmed.starts_with('\'') && trimmed.ends_with('\'') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };
    without_quotes.to_string()
}
