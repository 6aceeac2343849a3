mod balance_cell;

pub use balance_cell::{BalanceCell, SubscriptionId};
