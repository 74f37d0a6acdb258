//! Yono-Komae domain: battle records, judges, verdicts and play modes.
//!
//! Pure types and rules only. Randomness, time and I/O are injected by the
//! engine crate.

pub mod battle;
pub mod delay;
pub mod error;
pub mod judge;
pub mod play_mode;

pub use battle::{
    parse_battle, Battle, BattleStatus, Narrative, Neta, Provenance, PublishState, Significance,
};
pub use delay::{CappedDelay, DelayOption, MAX_DELAY_MS};
pub use error::DomainError;
pub use judge::{Judge, JudgeBias, Winner};
pub use play_mode::{PlayMode, PlayModeKind};
