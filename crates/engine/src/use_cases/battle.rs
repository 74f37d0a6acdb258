//! Battle report use case.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use yonokomae_domain::{Battle, PlayMode};

use crate::infrastructure::ports::RepoError;
use crate::provider::RepositoryProvider;

/// Generates a battle from the repository serving a play mode.
pub struct BattleReporter {
    provider: Arc<RepositoryProvider>,
}

impl BattleReporter {
    pub fn new(provider: Arc<RepositoryProvider>) -> Self {
        Self { provider }
    }

    pub async fn generate(
        &self,
        mode: &PlayMode,
        cancel: Option<&CancellationToken>,
    ) -> Result<Battle, RepoError> {
        let repo = self.provider.battle_report_repository(mode)?;
        match repo.generate_report(cancel).await {
            Ok(battle) => {
                tracing::info!(
                    mode = %mode.id,
                    battle_id = %battle.id,
                    title = %battle.title,
                    "Generated battle report"
                );
                Ok(battle)
            }
            Err(RepoError::Cancelled) => {
                tracing::debug!(mode = %mode.id, "Battle report cancelled");
                Err(RepoError::Cancelled)
            }
            Err(e) => {
                tracing::warn!(mode = %mode.id, error = %e, "Battle report failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::infrastructure::clock::{ManualClock, SystemRandom};
    use crate::infrastructure::ports::MockNewsFeedPort;
    use crate::seeds::SeedCatalog;
    use chrono::Utc;
    use yonokomae_domain::BattleStatus;

    fn reporter(feed: MockNewsFeedPort) -> BattleReporter {
        let config = EngineConfig {
            fast_delays: true,
            ..EngineConfig::default()
        };
        BattleReporter::new(Arc::new(RepositoryProvider::new(
            &config,
            Arc::new(ManualClock::new(Utc::now())),
            Arc::new(SystemRandom::new()),
            Arc::new(feed),
            SeedCatalog::builtin(),
        )))
    }

    #[tokio::test]
    async fn every_offline_mode_generates_a_valid_battle() {
        let reporter = reporter(MockNewsFeedPort::new());
        for id in ["demo", "demo-en", "demo-de", "historical-research", "random-jokes"] {
            let battle = reporter
                .generate(&PlayMode::new(id, id), None)
                .await
                .unwrap();
            assert_eq!(battle.status, BattleStatus::Success, "mode {id}");
            assert!(battle.validate().is_ok(), "mode {id}");
        }
    }

    #[tokio::test]
    async fn news_mode_falls_back_when_every_source_fails() {
        let mut feed = MockNewsFeedPort::new();
        feed.expect_public_ip()
            .returning(|_| Err(RepoError::http("ipify", 503)));
        feed.expect_weather_forecast()
            .returning(|_, _| Err(RepoError::network("open-meteo", "connection reset")));
        feed.expect_fallback_report().times(1).returning(|_| {
            Ok(serde_json::to_value(crate::test_fixtures::battle("news-fallback", 1.0, 2.0))
                .unwrap())
        });

        let reporter = reporter(feed);
        let mode = PlayMode::new("yk-now", "YK Now!");
        let first = reporter.generate(&mode, None).await.unwrap();
        // Second call is served from the news cache.
        let second = reporter.generate(&mode, None).await.unwrap();
        assert_eq!(first.id, "news-fallback");
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn unknown_mode_is_rejected() {
        let reporter = reporter(MockNewsFeedPort::new());
        let result = reporter
            .generate(&PlayMode::new("mystery", "Mystery"), None)
            .await;
        assert!(matches!(result, Err(RepoError::Configuration(_))));
    }

    #[tokio::test]
    async fn cancelled_token_is_reported_as_cancelled() {
        let reporter = reporter(MockNewsFeedPort::new());
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = reporter
            .generate(&PlayMode::new("demo-en", "Demo"), Some(&cancel))
            .await;
        assert_eq!(result, Err(RepoError::Cancelled));
    }
}
