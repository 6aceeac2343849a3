pub mod bindings;
pub mod client;
pub mod ops;
pub mod taiko;

pub use client::{RewardContract, SignerIdentity, TxOutcome};
pub use ops::{
    fetch_reward_balance, fetch_reward_balance_from, withdraw_balance, withdraw_balance_from,
};
pub use taiko::TaikoL1Client;
