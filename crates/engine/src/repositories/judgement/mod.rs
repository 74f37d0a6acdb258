//! Judgement repositories.

mod demo;
mod fake;
mod historical_evidences;

pub use demo::DemoJudgementRepo;
pub use fake::FakeJudgementRepo;
pub use historical_evidences::HistoricalEvidencesJudgementRepo;
