//! Use cases - orchestration over the play-mode repositories.

pub mod battle;
pub mod judge;

pub use battle::BattleReporter;
pub use judge::{JudgeError, JudgeService, JudgeVerdict, PanelVerdict, VerdictTally};
