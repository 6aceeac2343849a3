use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Contract reverted: {0}")]
    ContractRevert(String),

    #[error("Signer error: {0}")]
    Signer(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
