use alloy::signers::local::PrivateKeySigner;
use dashboard_contracts::{fetch_reward_balance, withdraw_balance};
use dashboard_core::DashboardConfig;
use dashboard_store::BalanceCell;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (ignore if not found)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    info!("Reward dashboard starting...");

    let config = match DashboardConfig::from_env() {
        Ok(config) => {
            info!(
                token_address = ?config.token_address,
                withdraw = config.withdraw,
                "Configuration loaded"
            );
            config
        }
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    let signer: PrivateKeySigner = match config.private_key.parse() {
        Ok(signer) => signer,
        Err(e) => {
            error!(error = %e, "Failed to parse PRIVATE_KEY");
            std::process::exit(1);
        }
    };
    info!(account = ?signer.address(), "Signer ready");

    // Reactive display surface; the UI layer subscribes for updates
    let cell = Arc::new(BalanceCell::new());
    cell.subscribe(|balance| info!(balance = ?balance, "Reward balance updated"));

    let balance = fetch_reward_balance(&signer, config.token_address, &config.rpc_url).await?;
    cell.set(balance);

    if config.withdraw {
        let outcome = withdraw_balance(&signer, config.token_address, &config.rpc_url).await?;
        info!(
            tx_hash = ?outcome.tx_hash,
            block_number = ?outcome.block_number,
            success = outcome.success,
            "Withdrawal submitted"
        );

        // Refresh the cell after the withdrawal lands
        let balance = fetch_reward_balance(&signer, config.token_address, &config.rpc_url).await?;
        cell.set(balance);
    }

    info!("Reward dashboard done");
    Ok(())
}
