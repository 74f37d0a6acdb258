//! Single-slot TTL cache.
//!
//! Holds at most one value with an expiry timestamp taken from the injected
//! clock. A zero TTL disables caching entirely.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::infrastructure::ports::ClockPort;

/// A thread-safe single value with time-to-live expiration.
pub struct TtlSlot<V> {
    entry: RwLock<Option<SlotEntry<V>>>,
    ttl: Duration,
    clock: Arc<dyn ClockPort>,
}

struct SlotEntry<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

impl<V> TtlSlot<V>
where
    V: Clone + Send + Sync,
{
    pub fn new(ttl: Duration, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            entry: RwLock::new(None),
            ttl,
            clock,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Store a value with a fresh expiry, replacing whatever was there.
    pub async fn store(&self, value: V) {
        if !self.is_enabled() {
            return;
        }
        let now = self.clock.now();
        let expires_at = chrono::Duration::from_std(self.ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        *self.entry.write().await = Some(SlotEntry { value, expires_at });
    }

    /// The stored value if it has not expired.
    pub async fn get(&self) -> Option<V> {
        let now = self.clock.now();
        let guard = self.entry.read().await;
        guard
            .as_ref()
            .filter(|entry| now < entry.expires_at)
            .map(|entry| entry.value.clone())
    }
}
