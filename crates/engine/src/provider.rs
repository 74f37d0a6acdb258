//! Resolves one repository instance per play mode.
//!
//! Instances are created on first request and kept for the life of the
//! provider, so per-repository caches (verdicts, news) live exactly as long
//! as the session that owns the provider.

use std::sync::Arc;

use dashmap::DashMap;
use yonokomae_domain::{DelayOption, PlayMode, PlayModeKind};

use crate::config::EngineConfig;
use crate::infrastructure::delay::Delayer;
use crate::infrastructure::ports::{
    BattleReportRepo, ClockPort, JudgementRepo, NewsFeedPort, RandomPort, RepoError,
};
use crate::repositories::{
    DemoBattleReportRepo, DemoJudgementRepo, FakeJudgementRepo, HistoricalEvidenceRepo,
    HistoricalEvidencesJudgementRepo, LocalePack, NewsReporterApiRepo, RandomJokesRepo,
};
use crate::seeds::SeedCatalog;

pub struct RepositoryProvider {
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
    feed: Arc<dyn NewsFeedPort>,
    catalog: Arc<SeedCatalog>,
    delayer: Arc<Delayer>,
    report_delay: Option<DelayOption>,
    judgement_delay: Option<DelayOption>,
    news_cache_ttl: std::time::Duration,
    fake_judgement: bool,
    jokes_default_power: f64,
    jokes_attribution: String,
    battle_repos: DashMap<PlayModeKind, Arc<dyn BattleReportRepo>>,
    judgement_repos: DashMap<PlayModeKind, Arc<dyn JudgementRepo>>,
}

impl RepositoryProvider {
    pub fn new(
        config: &EngineConfig,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        feed: Arc<dyn NewsFeedPort>,
        catalog: Arc<SeedCatalog>,
    ) -> Self {
        let delayer = Arc::new(Delayer::new(Arc::clone(&random), config.fast_delays));
        Self {
            clock,
            random,
            feed,
            catalog,
            delayer,
            report_delay: config.report_delay,
            judgement_delay: config.judgement_delay,
            news_cache_ttl: config.news_cache_ttl,
            fake_judgement: config.fake_judgement,
            jokes_default_power: config.jokes_default_power,
            jokes_attribution: config.jokes_attribution.clone(),
            battle_repos: DashMap::new(),
            judgement_repos: DashMap::new(),
        }
    }

    /// Battle source for `mode`. The same mode id always yields the same instance.
    ///
    /// Unknown mode ids fail with [`RepoError::Configuration`].
    pub fn battle_report_repository(
        &self,
        mode: &PlayMode,
    ) -> Result<Arc<dyn BattleReportRepo>, RepoError> {
        let kind = self.resolve(mode)?;
        let repo = self
            .battle_repos
            .entry(kind)
            .or_insert_with(|| {
                tracing::debug!(mode = %kind, "Creating battle report repository");
                self.build_battle_repo(kind)
            })
            .value()
            .clone();
        Ok(repo)
    }

    /// Judgement source for `mode`, memoized independently of the battle source.
    pub fn judgement_repository(
        &self,
        mode: &PlayMode,
    ) -> Result<Arc<dyn JudgementRepo>, RepoError> {
        let kind = self.resolve(mode)?;
        let repo = self
            .judgement_repos
            .entry(kind)
            .or_insert_with(|| {
                tracing::debug!(mode = %kind, fake = self.fake_judgement, "Creating judgement repository");
                self.build_judgement_repo(kind)
            })
            .value()
            .clone();
        Ok(repo)
    }

    fn resolve(&self, mode: &PlayMode) -> Result<PlayModeKind, RepoError> {
        mode.kind().map_err(|e| {
            tracing::error!(mode = %mode.id, "Unknown play mode");
            RepoError::from(e)
        })
    }

    fn build_battle_repo(&self, kind: PlayModeKind) -> Arc<dyn BattleReportRepo> {
        let random = Arc::clone(&self.random);
        let delayer = Arc::clone(&self.delayer);
        let delay = self.report_delay;
        match kind {
            PlayModeKind::DemoJa => {
                Arc::new(DemoBattleReportRepo::new(LocalePack::JA, random, delayer, delay))
            }
            PlayModeKind::DemoEn => {
                Arc::new(DemoBattleReportRepo::new(LocalePack::EN, random, delayer, delay))
            }
            PlayModeKind::DemoDe => {
                Arc::new(DemoBattleReportRepo::new(LocalePack::DE, random, delayer, delay))
            }
            PlayModeKind::HistoricalResearch => Arc::new(HistoricalEvidenceRepo::new(
                Arc::clone(&self.catalog),
                random,
                delayer,
                delay,
            )),
            PlayModeKind::NewsReporter => Arc::new(
                NewsReporterApiRepo::new(
                    Arc::clone(&self.feed),
                    Arc::clone(&self.clock),
                    random,
                    delayer,
                    delay,
                )
                .with_cache_ttl(self.news_cache_ttl),
            ),
            PlayModeKind::RandomJokes => Arc::new(
                RandomJokesRepo::new(Arc::clone(&self.catalog), random, delayer, delay)
                    .with_default_power(self.jokes_default_power)
                    .with_attribution(self.jokes_attribution.clone()),
            ),
        }
    }

    fn build_judgement_repo(&self, kind: PlayModeKind) -> Arc<dyn JudgementRepo> {
        if self.fake_judgement {
            return Arc::new(FakeJudgementRepo::new(
                Arc::clone(&self.delayer),
                self.judgement_delay,
            ));
        }
        if kind.is_demo() {
            return Arc::new(DemoJudgementRepo::new());
        }
        Arc::new(HistoricalEvidencesJudgementRepo::new(
            Arc::clone(&self.random),
            Arc::clone(&self.delayer),
            self.judgement_delay,
        ))
    }
}
