//! Application state and composition.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    news_feed::HttpNewsFeed,
    ports::{ClockPort, NewsFeedPort, RandomPort},
};
use crate::provider::RepositoryProvider;
use crate::seeds::SeedCatalog;
use crate::use_cases::{BattleReporter, JudgeService};

/// Main application state.
///
/// Owns the provider, and therefore every per-mode repository cache, for the
/// life of the session.
pub struct App {
    pub config: EngineConfig,
    pub provider: Arc<RepositoryProvider>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub battles: BattleReporter,
    pub judges: JudgeService,
}

impl App {
    /// Wire the production adapters.
    pub fn new(config: EngineConfig) -> Self {
        let feed = Arc::new(HttpNewsFeed::new(&config.api_base_url));
        Self::with_ports(
            config,
            Arc::new(SystemClock::new()),
            Arc::new(SystemRandom::new()),
            feed,
            SeedCatalog::builtin(),
        )
    }

    pub fn with_ports(
        config: EngineConfig,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        feed: Arc<dyn NewsFeedPort>,
        catalog: Arc<SeedCatalog>,
    ) -> Self {
        let provider = Arc::new(RepositoryProvider::new(
            &config, clock, random, feed, catalog,
        ));
        let use_cases = UseCases {
            battles: BattleReporter::new(Arc::clone(&provider)),
            judges: JudgeService::new(Arc::clone(&provider)),
        };
        Self {
            config,
            provider,
            use_cases,
        }
    }
}
