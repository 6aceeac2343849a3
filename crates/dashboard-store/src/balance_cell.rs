//! Reactive cell for the signer's reward balance
//!
//! Holds a single `U256` value and notifies subscribers synchronously on
//! every write, in subscription order. The cell starts unset; consumers
//! handle `None` themselves.

use alloy_primitives::U256;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

type Subscriber = Arc<dyn Fn(U256) + Send + Sync>;

/// Handle returned by `subscribe`, passed back to `unsubscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Thread-safe reactive holder for one balance value
pub struct BalanceCell {
    state: Mutex<CellState>,
    next_id: AtomicU64,
}

struct CellState {
    value: Option<U256>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl BalanceCell {
    /// Create an unset cell
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CellState {
                value: None,
                subscribers: Vec::new(),
            }),
            next_id: AtomicU64::new(0),
        }
    }

    /// Store a value and notify all current subscribers in subscription order.
    ///
    /// Callbacks run on the calling thread, outside the cell lock, so a
    /// subscriber may read the cell. Subscriber panics are not caught.
    pub fn set(&self, value: U256) {
        let subscribers: Vec<Subscriber> = {
            let mut state = self.state.lock().unwrap();
            state.value = Some(value);
            state.subscribers.iter().map(|(_, s)| s.clone()).collect()
        };

        debug!(
            value = ?value,
            subscribers = subscribers.len(),
            "Balance cell updated"
        );

        for subscriber in subscribers {
            subscriber(value);
        }
    }

    /// Last-set value, or `None` if nothing has been set yet
    pub fn get(&self) -> Option<U256> {
        self.state.lock().unwrap().value
    }

    /// Register a callback invoked on every subsequent `set`
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(U256) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let mut state = self.state.lock().unwrap();
        state.subscribers.push((id, Arc::new(callback)));
        id
    }

    /// Remove a subscriber; a stale id is a no-op
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut state = self.state.lock().unwrap();
        state.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().unwrap().subscribers.len()
    }
}

impl Default for BalanceCell {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BalanceCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BalanceCell")
            .field("value", &self.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
