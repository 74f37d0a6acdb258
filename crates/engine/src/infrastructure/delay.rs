//! Simulated latency shared by every repository.
//!
//! Repositories call [`Delayer::apply`] instead of sleeping directly so that
//! capping, fast-test mode and cancellation live in one place.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use yonokomae_domain::{DelayOption, MAX_DELAY_MS};

use crate::infrastructure::ports::{RandomPort, RepoError};

/// Resolves and waits out simulated delays.
pub struct Delayer {
    random: Arc<dyn RandomPort>,
    fast: bool,
}

impl Delayer {
    /// `fast` skips the wait; options are still capped and logged.
    pub fn new(random: Arc<dyn RandomPort>, fast: bool) -> Self {
        Self { random, fast }
    }

    /// Fast-test delayer backed by the given random source.
    pub fn immediate(random: Arc<dyn RandomPort>) -> Self {
        Self::new(random, true)
    }

    /// Cap the option and pick a concrete duration.
    ///
    /// Ranges are sampled uniformly, both bounds inclusive. `None` resolves
    /// to zero.
    pub fn resolve(&self, option: Option<&DelayOption>) -> Duration {
        let Some(option) = option else {
            return Duration::ZERO;
        };
        let capped = option.cap();
        if capped.exceeded_cap {
            match *option {
                DelayOption::Fixed(original_ms) => tracing::warn!(
                    original_ms,
                    capped_ms = capped.max_ms,
                    max_ms = MAX_DELAY_MS,
                    "Delay exceeds maximum, capping"
                ),
                DelayOption::Range { min, max } => tracing::warn!(
                    original_min_ms = min,
                    original_max_ms = max,
                    capped_min_ms = capped.min_ms,
                    capped_max_ms = capped.max_ms,
                    max_ms = MAX_DELAY_MS,
                    "Delay range exceeds maximum, capping"
                ),
            }
        }

        let ms = if capped.is_fixed() {
            capped.max_ms
        } else {
            let picked = self
                .random
                .gen_range(capped.min_ms as i64, capped.max_ms as i64);
            (picked.max(0) as u64).clamp(capped.min_ms, capped.max_ms)
        };
        Duration::from_millis(ms)
    }

    /// Wait for the resolved delay.
    ///
    /// Fails with [`RepoError::Cancelled`] if `cancel` is already triggered
    /// or fires during the wait; the pending timer is dropped with it.
    pub async fn apply(
        &self,
        option: Option<&DelayOption>,
        cancel: Option<&CancellationToken>,
    ) -> Result<(), RepoError> {
        if cancel.is_some_and(|c| c.is_cancelled()) {
            return Err(RepoError::Cancelled);
        }

        let duration = self.resolve(option);
        if self.fast || duration.is_zero() {
            return Ok(());
        }

        tracing::trace!(delay_ms = duration.as_millis() as u64, "Simulating latency");
        match cancel {
            Some(cancel) => {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => Err(RepoError::Cancelled),
                    _ = tokio::time::sleep(duration) => Ok(()),
                }
            }
            None => {
                tokio::time::sleep(duration).await;
                Ok(())
            }
        }
    }
}
