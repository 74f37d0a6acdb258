//! Battle records: the two-sided content a play mode produces.
//!
//! A [`Battle`] pits the Yono side against the Komae side. Records come from
//! authored seeds, template generators or external feeds, and every record is
//! validated through [`parse_battle`] or [`Battle::validate`] before it leaves
//! a repository.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One side of a battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neta {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Any finite number. Negative and fractional values are legal.
    pub power: f64,
    #[serde(default)]
    pub image_url: String,
}

impl Neta {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        description: impl Into<String>,
        power: f64,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            description: description.into(),
            power,
            image_url: String::new(),
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    fn is_populated(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.subtitle.trim().is_empty()
            && !self.description.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    pub overview: String,
    pub scenario: String,
}

impl Narrative {
    pub fn new(overview: impl Into<String>, scenario: impl Into<String>) -> Self {
        Self {
            overview: overview.into(),
            scenario: scenario.into(),
        }
    }
}

/// Citation attached to a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Provenance {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: None,
            note: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Significance {
    Low,
    #[default]
    Medium,
    High,
    Legendary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishState {
    Draft,
    Review,
    #[default]
    Published,
    Archived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleStatus {
    Loading,
    Success,
    Error,
}

/// A two-sided content record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub theme_id: String,
    #[serde(default)]
    pub significance: Significance,
    pub narrative: Narrative,
    pub yono: Neta,
    pub komae: Neta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Vec<Provenance>>,
    #[serde(default)]
    pub publish_state: PublishState,
    pub status: BattleStatus,
}

impl Battle {
    /// Check the record invariants.
    ///
    /// Ids and titles must be non-blank, both powers finite, and a
    /// `success` battle must carry fully populated sides.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::validation("battle id cannot be empty"));
        }
        if self.title.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "battle '{}' has an empty title",
                self.id
            )));
        }
        for (side, neta) in [("yono", &self.yono), ("komae", &self.komae)] {
            if neta.title.trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "battle '{}' side '{}' has an empty title",
                    self.id, side
                )));
            }
            if !neta.power.is_finite() {
                return Err(DomainError::validation(format!(
                    "battle '{}' side '{}' has a non-numeric power",
                    self.id, side
                )));
            }
            if self.status == BattleStatus::Success && !neta.is_populated() {
                return Err(DomainError::validation(format!(
                    "battle '{}' is marked success but side '{}' is incomplete",
                    self.id, side
                )));
            }
        }
        Ok(())
    }

    /// Append a provenance entry, creating the list if needed.
    pub fn push_provenance(&mut self, provenance: Provenance) {
        self.provenance.get_or_insert_with(Vec::new).push(provenance);
    }
}

/// Parse and validate a raw battle record.
///
/// Shape errors (missing fields, unknown status, string powers) are reported
/// as [`DomainError::Parse`]; invariant violations as [`DomainError::Validation`].
pub fn parse_battle(value: &serde_json::Value) -> Result<Battle, DomainError> {
    let battle: Battle =
        serde_json::from_value(value.clone()).map_err(|e| DomainError::parse(e.to_string()))?;
    battle.validate()?;
    Ok(battle)
}
