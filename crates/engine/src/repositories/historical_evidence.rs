//! Battles drawn from the historical evidence seeds.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use yonokomae_domain::{Battle, DelayOption};

use crate::infrastructure::delay::Delayer;
use crate::infrastructure::ports::{BattleReportRepo, RandomPort, RepoError};
use crate::seeds::{SeedCatalog, SeedCollection};

/// Serves one historical seed per report, chosen at random unless pinned.
pub struct HistoricalEvidenceRepo {
    catalog: Arc<SeedCatalog>,
    random: Arc<dyn RandomPort>,
    delayer: Arc<Delayer>,
    delay: Option<DelayOption>,
    seed_name: Option<String>,
}

impl HistoricalEvidenceRepo {
    pub fn new(
        catalog: Arc<SeedCatalog>,
        random: Arc<dyn RandomPort>,
        delayer: Arc<Delayer>,
        delay: Option<DelayOption>,
    ) -> Self {
        Self {
            catalog,
            random,
            delayer,
            delay,
            seed_name: None,
        }
    }

    /// Always serve the named seed.
    pub fn with_seed(mut self, name: impl Into<String>) -> Self {
        self.seed_name = Some(name.into());
        self
    }
}

#[async_trait]
impl BattleReportRepo for HistoricalEvidenceRepo {
    async fn generate_report(
        &self,
        cancel: Option<&CancellationToken>,
    ) -> Result<Battle, RepoError> {
        self.delayer.apply(self.delay.as_ref(), cancel).await?;

        let record = match &self.seed_name {
            Some(name) => self
                .catalog
                .find(SeedCollection::Historical, name)
                .ok_or_else(|| RepoError::not_found("historical seed", name))?,
            None => self
                .catalog
                .pick(SeedCollection::Historical, self.random.as_ref())
                .ok_or_else(|| RepoError::not_found("historical seed", "<any>"))?,
        };

        let battle = record.load().map_err(|e| {
            tracing::error!(seed = record.name(), error = %e, "Historical seed failed validation");
            RepoError::from(e)
        })?;
        tracing::debug!(seed = record.name(), battle_id = %battle.id, "Loaded historical battle");
        Ok(battle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedRandom, SystemRandom};

    fn repo(catalog: Arc<SeedCatalog>) -> HistoricalEvidenceRepo {
        let random: Arc<dyn RandomPort> = Arc::new(FixedRandom(0.0));
        HistoricalEvidenceRepo::new(
            catalog,
            random.clone(),
            Arc::new(Delayer::immediate(random)),
            Some(DelayOption::range(500, 1_500)),
        )
    }

    #[tokio::test]
    async fn returns_random_seed() {
        let battle = repo(SeedCatalog::builtin())
            .generate_report(None)
            .await
            .unwrap();
        assert_eq!(battle.id, "hist-city-merger-2001");
        assert!(battle.provenance.is_some());
    }

    #[tokio::test]
    async fn any_seed_is_valid_with_real_randomness() {
        let random: Arc<dyn RandomPort> = Arc::new(SystemRandom::new());
        let repo = HistoricalEvidenceRepo::new(
            SeedCatalog::builtin(),
            random.clone(),
            Arc::new(Delayer::immediate(random)),
            None,
        );
        for _ in 0..10 {
            assert!(repo.generate_report(None).await.is_ok());
        }
    }

    #[tokio::test]
    async fn returns_pinned_seed() {
        let battle = repo(SeedCatalog::builtin())
            .with_seed("ancient-burial-mounds")
            .generate_report(None)
            .await
            .unwrap();
        assert_eq!(battle.id, "hist-ancient-mounds");
    }

    #[tokio::test]
    async fn unknown_pinned_seed_is_not_found() {
        let err = repo(SeedCatalog::builtin())
            .with_seed("nope")
            .generate_report(None)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound { .. }));
    }

    #[tokio::test]
    async fn malformed_seed_is_fatal_validation_error() {
        let catalog = SeedCatalog::empty().with_record(
            SeedCollection::Historical,
            "bad",
            r#"{"id":"","title":"x","themeId":"t","narrative":{"overview":"","scenario":""},
               "yono":{"title":"a","subtitle":"b","description":"c","power":1},
               "komae":{"title":"a","subtitle":"b","description":"c","power":1},
               "status":"success"}"#,
        );
        let err = repo(Arc::new(catalog)).generate_report(None).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn cancelled_before_delay() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let err = repo(SeedCatalog::builtin())
            .generate_report(Some(&cancel))
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
    }
}
