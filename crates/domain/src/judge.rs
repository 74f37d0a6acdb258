//! Judges, verdicts and the per-judge bias rules.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a judgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Winner {
    Yono,
    Komae,
    Draw,
}

impl Winner {
    /// Plain numeric ordering of the two powers. Greater wins, equal draws.
    ///
    /// Incomparable values (NaN) are treated as a draw so the comparison
    /// stays total.
    pub fn from_powers(yono: f64, komae: f64) -> Self {
        match yono.partial_cmp(&komae) {
            Some(Ordering::Greater) => Self::Yono,
            Some(Ordering::Less) => Self::Komae,
            Some(Ordering::Equal) | None => Self::Draw,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yono => "YONO",
            Self::Komae => "KOMAE",
            Self::Draw => "DRAW",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A judge on the panel. The code name selects a [`JudgeBias`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Judge {
    pub id: String,
    pub name: String,
    pub code_name: String,
}

impl Judge {
    pub fn new(id: impl Into<String>, name: impl Into<String>, code_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code_name: code_name.into(),
        }
    }

    pub fn bias(&self) -> JudgeBias {
        JudgeBias::from_code_name(&self.code_name)
    }

    /// The default five-member panel.
    pub fn roster() -> Vec<Judge> {
        vec![
            Judge::new("judge-o", "Judge O", "O"),
            Judge::new("judge-u", "Judge U", "U"),
            Judge::new("judge-s", "Judge S", "S"),
            Judge::new("judge-c", "Judge C", "C"),
            Judge::new("judge-k", "Judge K", "K"),
        ]
    }
}

/// Bias rule applied before the power comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JudgeBias {
    /// Awards `favours` whenever the draw falls below `threshold`.
    Leaning { favours: Winner, threshold: f64 },
    Neutral,
}

impl JudgeBias {
    /// Code names are trimmed and compared case-insensitively.
    pub fn from_code_name(code_name: &str) -> Self {
        match code_name.trim().to_ascii_uppercase().as_str() {
            "O" | "U" => Self::Leaning {
                favours: Winner::Yono,
                threshold: 0.2,
            },
            "S" | "C" => Self::Leaning {
                favours: Winner::Komae,
                threshold: 0.2,
            },
            "K" => Self::Leaning {
                favours: Winner::Komae,
                threshold: 0.9,
            },
            _ => Self::Neutral,
        }
    }

    /// The biased verdict for draw `r` in `[0, 1)`, if the bias triggers.
    pub fn apply(&self, r: f64) -> Option<Winner> {
        match *self {
            Self::Leaning { favours, threshold } if r < threshold => Some(favours),
            _ => None,
        }
    }

    /// Bias first, then the power comparison.
    pub fn decide(&self, r: f64, yono_power: f64, komae_power: f64) -> Winner {
        self.apply(r)
            .unwrap_or_else(|| Winner::from_powers(yono_power, komae_power))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_comparison_handles_awkward_numbers() {
        assert_eq!(Winner::from_powers(50.5, 50.4), Winner::Yono);
        assert_eq!(Winner::from_powers(-10.0, -2.0), Winner::Komae);
        assert_eq!(Winner::from_powers(7.0, 7.0), Winner::Draw);
        let big = 9_007_199_254_740_991.0_f64;
        assert_eq!(Winner::from_powers(big, big - 2.0), Winner::Yono);
        assert_eq!(Winner::from_powers(f64::NAN, 1.0), Winner::Draw);
    }

    #[test]
    fn code_names_are_trimmed_and_case_folded() {
        assert_eq!(
            JudgeBias::from_code_name(" o "),
            JudgeBias::from_code_name("O")
        );
        assert_eq!(JudgeBias::from_code_name("k"), JudgeBias::from_code_name("K"));
        assert_eq!(JudgeBias::from_code_name("Z"), JudgeBias::Neutral);
        assert_eq!(JudgeBias::from_code_name(""), JudgeBias::Neutral);
    }

    #[test]
    fn yono_leaning_judges() {
        for code in ["O", "U"] {
            let bias = JudgeBias::from_code_name(code);
            assert_eq!(bias.decide(0.19, 10.0, 90.0), Winner::Yono);
            assert_eq!(bias.decide(0.2, 10.0, 90.0), Winner::Komae);
        }
    }

    #[test]
    fn komae_leaning_judges() {
        for code in ["S", "C"] {
            let bias = JudgeBias::from_code_name(code);
            assert_eq!(bias.decide(0.0, 90.0, 10.0), Winner::Komae);
            assert_eq!(bias.decide(0.5, 90.0, 10.0), Winner::Yono);
        }
    }

    #[test]
    fn k_judge_mostly_favours_komae() {
        let bias = JudgeBias::from_code_name("K");
        assert_eq!(bias.decide(0.89, 90.0, 10.0), Winner::Komae);
        assert_eq!(bias.decide(0.9, 90.0, 10.0), Winner::Yono);
        assert_eq!(bias.decide(0.95, 30.0, 30.0), Winner::Draw);
    }

    #[test]
    fn winner_serializes_uppercase() {
        let json = serde_json::to_string(&Winner::Komae).unwrap();
        assert_eq!(json, "\"KOMAE\"");
        assert_eq!(Winner::Draw.to_string(), "DRAW");
    }

    #[test]
    fn roster_has_five_distinct_judges() {
        let roster = Judge::roster();
        assert_eq!(roster.len(), 5);
        let ids: std::collections::HashSet<_> = roster.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids.len(), 5);
    }
}
