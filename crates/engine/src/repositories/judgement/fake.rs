use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use yonokomae_domain::{Battle, DelayOption, Judge, Winner};

use crate::infrastructure::delay::Delayer;
use crate::infrastructure::ports::{JudgementRepo, RepoError};

/// Power comparison after a simulated delay. Used to exercise loading states.
pub struct FakeJudgementRepo {
    delayer: Arc<Delayer>,
    delay: Option<DelayOption>,
}

impl FakeJudgementRepo {
    pub fn new(delayer: Arc<Delayer>, delay: Option<DelayOption>) -> Self {
        Self { delayer, delay }
    }
}

#[async_trait]
impl JudgementRepo for FakeJudgementRepo {
    async fn determine_winner(
        &self,
        battle: &Battle,
        judge: &Judge,
        cancel: Option<&CancellationToken>,
    ) -> Result<Winner, RepoError> {
        self.delayer.apply(self.delay.as_ref(), cancel).await?;
        let winner = Winner::from_powers(battle.yono.power, battle.komae.power);
        tracing::trace!(judge_id = %judge.id, winner = %winner, "Fake judgement");
        Ok(winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::SystemRandom;
    use crate::test_fixtures::{battle, judge};

    fn repo(delay_ms: i64) -> FakeJudgementRepo {
        FakeJudgementRepo::new(
            Arc::new(Delayer::new(Arc::new(SystemRandom::new()), false)),
            Some(DelayOption::fixed(delay_ms)),
        )
    }

    #[tokio::test]
    async fn compares_power_after_delay() {
        let negative = battle("fake-1", -4.0, -5.5);
        assert_eq!(
            repo(5).determine_winner(&negative, &judge("S"), None).await,
            Ok(Winner::Yono)
        );
    }

    #[tokio::test]
    async fn cancellation_aborts() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = repo(5_000)
            .determine_winner(&battle("fake-1", 1.0, 2.0), &judge("S"), Some(&cancel))
            .await;
        assert_eq!(result, Err(RepoError::Cancelled));
    }
}
