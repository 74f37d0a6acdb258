//! Repository port traits for battle content and judgement.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use yonokomae_domain::{Battle, Judge, Winner};

use super::error::RepoError;

// =============================================================================
// Battle Reports
// =============================================================================

/// Produces a [`Battle`] for one play mode.
#[async_trait]
pub trait BattleReportRepo: Send + Sync {
    /// `cancel` aborts any simulated delay or outbound fetch with
    /// [`RepoError::Cancelled`]. `None` means the call cannot be cancelled.
    async fn generate_report(&self, cancel: Option<&CancellationToken>)
        -> Result<Battle, RepoError>;
}

// =============================================================================
// Judgement
// =============================================================================

/// Decides the winner of a battle for one judge.
#[async_trait]
pub trait JudgementRepo: Send + Sync {
    async fn determine_winner(
        &self,
        battle: &Battle,
        judge: &Judge,
        cancel: Option<&CancellationToken>,
    ) -> Result<Winner, RepoError>;
}
