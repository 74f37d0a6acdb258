//! Humorous battles built on the joke seeds.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use yonokomae_domain::{
    Battle, BattleStatus, DelayOption, Narrative, Neta, Provenance, PublishState, Significance,
};

use crate::infrastructure::delay::Delayer;
use crate::infrastructure::ports::{BattleReportRepo, RandomPort, RepoError};
use crate::seeds::{SeedCatalog, SeedCollection};

pub const DEFAULT_JOKE_POWER: f64 = 50.0;
pub const DEFAULT_ATTRIBUTION: &str = "Yono-Komae Joke Desk";

/// Loads a joke seed and decorates it with attribution and a flat power.
pub struct RandomJokesRepo {
    catalog: Arc<SeedCatalog>,
    random: Arc<dyn RandomPort>,
    delayer: Arc<Delayer>,
    delay: Option<DelayOption>,
    seed_name: Option<String>,
    default_power: f64,
    attribution: String,
}

impl RandomJokesRepo {
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
            default_power: DEFAULT_JOKE_POWER,
            attribution: DEFAULT_ATTRIBUTION.to_string(),
        }
    }

    pub fn with_seed(mut self, name: impl Into<String>) -> Self {
        self.seed_name = Some(name.into());
        self
    }

    pub fn with_default_power(mut self, power: f64) -> Self {
        self.default_power = power;
        self
    }

    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = attribution.into();
        self
    }

    /// Skeleton used when no seed is available.
    fn fallback_skeleton() -> Battle {
        Battle {
            id: "joke-default".to_string(),
            title: "The Eternal Stalemate".to_string(),
            subtitle: "Nobody remembers how it started".to_string(),
            theme_id: "jokes".to_string(),
            significance: Significance::Low,
            narrative: Narrative::new(
                "Yono and Komae have been arguing since before either had a station.",
                "Today they argue about who is arguing louder.",
            ),
            yono: Neta::new("Yono", "Loud", "Insists it started first.", 0.0),
            komae: Neta::new("Komae", "Louder", "Insists it started second, on purpose.", 0.0),
            provenance: None,
            publish_state: PublishState::Published,
            status: BattleStatus::Success,
        }
    }

    fn decorate(&self, mut battle: Battle, seed: &str) -> Battle {
        for side in [&mut battle.yono, &mut battle.komae] {
            side.description = format!("{} ({})", side.description, self.attribution);
            side.power = self.default_power;
        }
        battle.push_provenance(Provenance::new(format!("random-jokes seed: {seed}")));
        battle
    }
}

#[async_trait]
impl BattleReportRepo for RandomJokesRepo {
    async fn generate_report(
        &self,
        cancel: Option<&CancellationToken>,
    ) -> Result<Battle, RepoError> {
        self.delayer.apply(self.delay.as_ref(), cancel).await?;

        let record = match &self.seed_name {
            Some(name) => self.catalog.find(SeedCollection::Jokes, name),
            None => self
                .catalog
                .pick(SeedCollection::Jokes, self.random.as_ref()),
        };

        let (skeleton, seed) = match record {
            Some(record) => (record.load()?, record.name().to_string()),
            None => {
                tracing::warn!(
                    requested = self.seed_name.as_deref().unwrap_or("<any>"),
                    "No joke seed available, using default skeleton"
                );
                (Self::fallback_skeleton(), "default".to_string())
            }
        };

        let battle = self.decorate(skeleton, &seed);
        battle.validate()?;
        Ok(battle)
    }
}
