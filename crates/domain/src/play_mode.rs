//! Play modes select which repositories serve a session.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Descriptor for a play mode. Only `id` takes part in routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayMode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl PlayMode {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            enabled: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Resolve the routing kind for this mode's id.
    pub fn kind(&self) -> Result<PlayModeKind, DomainError> {
        self.id.parse()
    }

    /// Every mode the engine knows how to serve.
    pub fn builtin() -> Vec<PlayMode> {
        PlayModeKind::ALL
            .iter()
            .map(|kind| PlayMode::new(kind.id(), kind.title()).with_description(kind.description()))
            .collect()
    }
}

/// Routing key derived from a [`PlayMode`] id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayModeKind {
    DemoJa,
    DemoEn,
    DemoDe,
    HistoricalResearch,
    NewsReporter,
    RandomJokes,
}

impl PlayModeKind {
    pub const ALL: [PlayModeKind; 6] = [
        Self::DemoJa,
        Self::DemoEn,
        Self::DemoDe,
        Self::HistoricalResearch,
        Self::NewsReporter,
        Self::RandomJokes,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::DemoJa => "demo",
            Self::DemoEn => "demo-en",
            Self::DemoDe => "demo-de",
            Self::HistoricalResearch => "historical-research",
            Self::NewsReporter => "yk-now",
            Self::RandomJokes => "random-jokes",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::DemoJa => "デモ",
            Self::DemoEn => "Demo (English)",
            Self::DemoDe => "Demo (Deutsch)",
            Self::HistoricalResearch => "Historical Research",
            Self::NewsReporter => "YK Now!",
            Self::RandomJokes => "Random Jokes",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::DemoJa | Self::DemoEn | Self::DemoDe => "Template battles with random powers",
            Self::HistoricalResearch => "Battles drawn from historical evidence seeds",
            Self::NewsReporter => "Live battles built from today's public data",
            Self::RandomJokes => "Humorous battles from the joke seeds",
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Self::DemoJa | Self::DemoEn | Self::DemoDe)
    }
}

impl FromStr for PlayModeKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| DomainError::unknown_play_mode(s))
    }
}

impl fmt::Display for PlayModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
