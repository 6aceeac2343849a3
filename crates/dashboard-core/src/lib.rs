pub mod config;
pub mod error;

pub use config::DashboardConfig;
pub use error::{DashboardError, Result};
