//! Yono-Komae battle engine library.
//!
//! Produces battle reports and judge verdicts for each play mode.
//!
//! ## Structure
//!
//! - `repositories/` - Battle report and judgement sources per play mode
//! - `provider` - Memoized repository resolution by play mode
//! - `use_cases/` - Battle generation and judging orchestration
//! - `infrastructure/` - Ports, delay simulation, caches and HTTP adapters
//! - `seeds` - Embedded seed catalog
//! - `config` - Environment configuration
//! - `app` - Application composition

pub mod app;
pub mod config;
pub mod infrastructure;
pub mod provider;
pub mod repositories;
pub mod seeds;
pub mod use_cases;

/// Shared builders for unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
pub use config::EngineConfig;
pub use provider::RepositoryProvider;
