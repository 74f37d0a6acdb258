use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use yonokomae_domain::{Battle, Judge, Winner};

use crate::infrastructure::ports::{JudgementRepo, RepoError};

/// Power comparison only. No bias, no cache, no delay.
#[derive(Debug, Default)]
pub struct DemoJudgementRepo;

impl DemoJudgementRepo {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl JudgementRepo for DemoJudgementRepo {
    async fn determine_winner(
        &self,
        battle: &Battle,
        _judge: &Judge,
        _cancel: Option<&CancellationToken>,
    ) -> Result<Winner, RepoError> {
        Ok(Winner::from_powers(battle.yono.power, battle.komae.power))
    }
}
