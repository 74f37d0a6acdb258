//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Battle content and judgement (swap seed, template, or live sources)
//! - Public data feeds (could swap reqwest -> recorded fixtures)
//! - Clock/Random (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{BattleReportRepo, JudgementRepo};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{Coordinates, DailySeries, LocationForecast, NewsFeedPort};

#[cfg(test)]
pub use external::MockNewsFeedPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};

#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
