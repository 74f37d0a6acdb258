use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio_util::sync::CancellationToken;
use yonokomae_domain::{Battle, DelayOption, Judge, Winner};

use crate::infrastructure::delay::Delayer;
use crate::infrastructure::ports::{JudgementRepo, RandomPort, RepoError};

/// Verdicts keyed by `(battle_id, judge_id)`.
type VerdictKey = (String, String);

/// Biased, cached judgement.
///
/// The first verdict for a `(battle, judge)` pair is remembered for the life
/// of the repository, so later calls return it even if the battle's powers
/// have changed. Two first calls racing for the same pair may both compute;
/// the later write wins.
pub struct HistoricalEvidencesJudgementRepo {
    verdicts: DashMap<VerdictKey, Winner>,
    random: Arc<dyn RandomPort>,
    delayer: Arc<Delayer>,
    delay: Option<DelayOption>,
}

impl HistoricalEvidencesJudgementRepo {
    pub fn new(
        random: Arc<dyn RandomPort>,
        delayer: Arc<Delayer>,
        delay: Option<DelayOption>,
    ) -> Self {
        Self {
            verdicts: DashMap::new(),
            random,
            delayer,
            delay,
        }
    }

    pub fn cached_verdicts(&self) -> usize {
        self.verdicts.len()
    }

    fn cached(&self, key: &VerdictKey) -> Option<Winner> {
        self.verdicts.get(key).map(|entry| *entry.value())
    }
}

#[async_trait]
impl JudgementRepo for HistoricalEvidencesJudgementRepo {
    async fn determine_winner(
        &self,
        battle: &Battle,
        judge: &Judge,
        cancel: Option<&CancellationToken>,
    ) -> Result<Winner, RepoError> {
        let key = (battle.id.clone(), judge.id.clone());
        if let Some(winner) = self.cached(&key) {
            tracing::trace!(battle_id = %battle.id, judge_id = %judge.id, "Verdict cache hit");
            return Ok(winner);
        }

        self.delayer.apply(self.delay.as_ref(), cancel).await?;

        let r = self.random.unit();
        let winner = judge
            .bias()
            .decide(r, battle.yono.power, battle.komae.power);

        if let Some(previous) = self.verdicts.insert(key, winner) {
            if previous != winner {
                tracing::debug!(
                    battle_id = %battle.id,
                    judge_id = %judge.id,
                    previous = %previous,
                    winner = %winner,
                    "Concurrent first verdicts disagreed, keeping the latest"
                );
            }
        }

        tracing::debug!(
            battle_id = %battle.id,
            judge_id = %judge.id,
            code_name = %judge.code_name,
            draw = r,
            winner = %winner,
            "Determined winner"
        );
        Ok(winner)
    }
}
