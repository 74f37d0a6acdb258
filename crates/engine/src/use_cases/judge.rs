//! Judgement use cases.
//!
//! A single judge forwards to the judgement repository of the active play
//! mode. A panel asks every judge at once and tallies the verdicts.

use std::sync::Arc;

use futures_util::future::try_join_all;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use yonokomae_domain::{Battle, Judge, PlayMode, Winner};

use crate::infrastructure::ports::RepoError;
use crate::provider::RepositoryProvider;

/// One judge's verdict within a panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeVerdict {
    pub judge_id: String,
    pub judge_name: String,
    pub winner: Winner,
}

/// Vote counts for a panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictTally {
    pub yono: usize,
    pub komae: usize,
    pub draw: usize,
}

impl VerdictTally {
    pub fn count<'a>(verdicts: impl IntoIterator<Item = &'a Winner>) -> Self {
        verdicts
            .into_iter()
            .fold(Self::default(), |mut tally, winner| {
                match winner {
                    Winner::Yono => tally.yono += 1,
                    Winner::Komae => tally.komae += 1,
                    Winner::Draw => tally.draw += 1,
                }
                tally
            })
    }

    pub fn total(&self) -> usize {
        self.yono + self.komae + self.draw
    }

    /// The side with more votes. Draw votes do not count toward either side.
    pub fn winner(&self) -> Winner {
        match self.yono.cmp(&self.komae) {
            std::cmp::Ordering::Greater => Winner::Yono,
            std::cmp::Ordering::Less => Winner::Komae,
            std::cmp::Ordering::Equal => Winner::Draw,
        }
    }
}

/// Verdicts from every judge on a panel, in panel order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelVerdict {
    pub battle_id: String,
    pub verdicts: Vec<JudgeVerdict>,
    pub tally: VerdictTally,
    pub winner: Winner,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JudgeError {
    #[error("Panel has no judges")]
    EmptyPanel,
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl JudgeError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Repo(e) if e.is_cancelled())
    }
}

pub struct JudgeService {
    provider: Arc<RepositoryProvider>,
}

impl JudgeService {
    pub fn new(provider: Arc<RepositoryProvider>) -> Self {
        Self { provider }
    }

    /// Ask one judge for a verdict on `battle`.
    pub async fn determine_winner(
        &self,
        mode: &PlayMode,
        battle: &Battle,
        judge: &Judge,
        cancel: Option<&CancellationToken>,
    ) -> Result<Winner, JudgeError> {
        let repo = self.provider.judgement_repository(mode)?;
        let winner = repo.determine_winner(battle, judge, cancel).await?;
        Ok(winner)
    }

    /// Ask every judge concurrently. The first failure, including
    /// cancellation, fails the whole panel.
    pub async fn determine_panel(
        &self,
        mode: &PlayMode,
        battle: &Battle,
        judges: &[Judge],
        cancel: Option<&CancellationToken>,
    ) -> Result<PanelVerdict, JudgeError> {
        if judges.is_empty() {
            return Err(JudgeError::EmptyPanel);
        }
        let repo = self.provider.judgement_repository(mode)?;

        let winners = try_join_all(
            judges
                .iter()
                .map(|judge| repo.determine_winner(battle, judge, cancel)),
        )
        .await?;

        let tally = VerdictTally::count(&winners);
        let verdicts = judges
            .iter()
            .zip(winners)
            .map(|(judge, winner)| JudgeVerdict {
                judge_id: judge.id.clone(),
                judge_name: judge.name.clone(),
                winner,
            })
            .collect();

        tracing::info!(
            mode = %mode.id,
            battle_id = %battle.id,
            yono = tally.yono,
            komae = tally.komae,
            draw = tally.draw,
            winner = %tally.winner(),
            "Panel verdict"
        );

        Ok(PanelVerdict {
            battle_id: battle.id.clone(),
            verdicts,
            winner: tally.winner(),
            tally,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::infrastructure::clock::{FixedRandom, SystemClock};
    use crate::infrastructure::ports::MockNewsFeedPort;
    use crate::seeds::SeedCatalog;
    use crate::test_fixtures::{battle, judge};
    use yonokomae_domain::DelayOption;

    fn service(config: EngineConfig, draw: f64) -> JudgeService {
        JudgeService::new(Arc::new(RepositoryProvider::new(
            &config,
            Arc::new(SystemClock::new()),
            Arc::new(FixedRandom(draw)),
            Arc::new(MockNewsFeedPort::new()),
            SeedCatalog::builtin(),
        )))
    }

    fn fast() -> EngineConfig {
        EngineConfig {
            fast_delays: true,
            ..EngineConfig::default()
        }
    }

    fn historical() -> PlayMode {
        PlayMode::new("historical-research", "History")
    }

    #[test]
    fn tally_majority() {
        let tally = VerdictTally::count(&[Winner::Yono, Winner::Draw, Winner::Komae, Winner::Yono]);
        assert_eq!(tally, VerdictTally { yono: 2, komae: 1, draw: 1 });
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.winner(), Winner::Yono);

        let even = VerdictTally::count(&[Winner::Yono, Winner::Komae, Winner::Draw]);
        assert_eq!(even.winner(), Winner::Draw);
    }

    #[tokio::test]
    async fn single_judge_forwards_to_mode_repository() {
        let service = service(fast(), 0.1);
        let result = service
            .determine_winner(&historical(), &battle("b-1", 10.0, 90.0), &judge("U"), None)
            .await;
        assert_eq!(result, Ok(Winner::Yono));
    }

    #[tokio::test]
    async fn panel_keeps_roster_order() {
        let service = service(fast(), 0.1);
        let roster = Judge::roster();
        let panel = service
            .determine_panel(&historical(), &battle("b-1", 50.0, 50.0), &roster, None)
            .await
            .unwrap();

        let winners: Vec<Winner> = panel.verdicts.iter().map(|v| v.winner).collect();
        assert_eq!(
            winners,
            vec![Winner::Yono, Winner::Yono, Winner::Komae, Winner::Komae, Winner::Komae]
        );
        assert_eq!(panel.verdicts[0].judge_id, "judge-o");
        assert_eq!(panel.tally, VerdictTally { yono: 2, komae: 3, draw: 0 });
        assert_eq!(panel.winner, Winner::Komae);
    }

    #[tokio::test]
    async fn demo_panel_is_unanimous_on_power() {
        let service = service(fast(), 0.1);
        let panel = service
            .determine_panel(
                &PlayMode::new("demo-en", "Demo"),
                &battle("b-1", 80.0, 20.0),
                &Judge::roster(),
                None,
            )
            .await
            .unwrap();
        assert_eq!(panel.tally.yono, 5);
        assert_eq!(panel.winner, Winner::Yono);
    }

    #[tokio::test]
    async fn empty_panel_is_rejected() {
        let service = service(fast(), 0.1);
        let result = service
            .determine_panel(&historical(), &battle("b-1", 1.0, 2.0), &[], None)
            .await;
        assert_eq!(result, Err(JudgeError::EmptyPanel));
    }

    #[tokio::test]
    async fn cancellation_fails_the_panel() {
        let service = service(
            EngineConfig {
                judgement_delay: Some(DelayOption::fixed(5_000)),
                ..EngineConfig::default()
            },
            0.1,
        );
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            trigger.cancel();
        });

        let result = service
            .determine_panel(&historical(), &battle("b-1", 1.0, 2.0), &Judge::roster(), Some(&cancel))
            .await;
        assert!(result.as_ref().is_err_and(JudgeError::is_cancelled));
    }

    #[tokio::test]
    async fn unknown_mode_is_a_configuration_error() {
        let service = service(fast(), 0.1);
        let result = service
            .determine_winner(
                &PlayMode::new("mystery", "Mystery"),
                &battle("b-1", 1.0, 2.0),
                &judge("O"),
                None,
            )
            .await;
        assert!(matches!(result, Err(JudgeError::Repo(RepoError::Configuration(_)))));
    }
}
