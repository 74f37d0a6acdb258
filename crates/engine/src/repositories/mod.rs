//! Repository modules - concrete battle report and judgement sources.
//!
//! Each repository implements one of the port traits in
//! `infrastructure::ports` and is resolved per play mode by the provider.

pub mod demo;
pub mod historical_evidence;
pub mod judgement;
pub mod news_reporter;
pub mod random_jokes;

pub use demo::{DemoBattleReportRepo, LocalePack};
pub use historical_evidence::HistoricalEvidenceRepo;
pub use judgement::{DemoJudgementRepo, FakeJudgementRepo, HistoricalEvidencesJudgementRepo};
pub use news_reporter::NewsReporterApiRepo;
pub use random_jokes::RandomJokesRepo;
