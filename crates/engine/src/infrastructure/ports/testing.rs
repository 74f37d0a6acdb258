//! Testability ports for injecting time and randomness.

use chrono::{DateTime, Utc};
use uuid::Uuid;

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform draw in `[0, 1)`.
    fn unit(&self) -> f64;
    /// Uniform integer in `[min, max]`, both inclusive.
    fn gen_range(&self, min: i64, max: i64) -> i64;
    fn gen_uuid(&self) -> Uuid;
}
