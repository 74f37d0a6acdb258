//! Simulated latency settings.
//!
//! Durations are in milliseconds and are always capped into
//! `[0, MAX_DELAY_MS]` before anything waits on them.

use serde::{Deserialize, Serialize};

/// Upper bound for any simulated delay.
pub const MAX_DELAY_MS: u64 = 10_000;

/// Requested delay: a fixed duration or an inclusive random range.
///
/// Only whole milliseconds are accepted. A fractional value such as `250.5`
/// fails to deserialize rather than being rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DelayOption {
    Fixed(i64),
    Range { min: i64, max: i64 },
}

/// A [`DelayOption`] after capping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CappedDelay {
    pub min_ms: u64,
    pub max_ms: u64,
    /// True when an original value exceeded [`MAX_DELAY_MS`].
    pub exceeded_cap: bool,
}

impl CappedDelay {
    pub fn is_fixed(&self) -> bool {
        self.min_ms == self.max_ms
    }
}

fn clamp_ms(value: i64) -> u64 {
    // Negative values clamp to zero.
    u64::try_from(value).unwrap_or(0).min(MAX_DELAY_MS)
}

impl DelayOption {
    pub fn fixed(ms: i64) -> Self {
        Self::Fixed(ms)
    }

    pub fn range(min: i64, max: i64) -> Self {
        Self::Range { min, max }
    }

    /// Clamp every bound into `[0, MAX_DELAY_MS]` and enforce `min <= max`.
    ///
    /// A range whose lower bound ends up above its upper bound collapses to
    /// the upper bound.
    pub fn cap(&self) -> CappedDelay {
        let cap = MAX_DELAY_MS as i64;
        match *self {
            Self::Fixed(ms) => {
                let capped = clamp_ms(ms);
                CappedDelay {
                    min_ms: capped,
                    max_ms: capped,
                    exceeded_cap: ms > cap,
                }
            }
            Self::Range { min, max } => {
                let capped_max = clamp_ms(max);
                let capped_min = clamp_ms(min).min(capped_max);
                CappedDelay {
                    min_ms: capped_min,
                    max_ms: capped_max,
                    exceeded_cap: min > cap || max > cap,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_over_cap_is_flagged() {
        let capped = DelayOption::fixed(20_000).cap();
        assert_eq!(capped.max_ms, MAX_DELAY_MS);
        assert!(capped.is_fixed());
        assert!(capped.exceeded_cap);
    }

    #[test]
    fn negative_fixed_clamps_silently() {
        let capped = DelayOption::fixed(-5).cap();
        assert_eq!(capped.min_ms, 0);
        assert!(!capped.exceeded_cap);
    }

    #[test]
    fn range_over_cap_is_flagged() {
        let capped = DelayOption::range(5_000, 20_000).cap();
        assert_eq!(capped.min_ms, 5_000);
        assert_eq!(capped.max_ms, MAX_DELAY_MS);
        assert!(capped.exceeded_cap);
    }

    #[test]
    fn inverted_range_collapses_to_max() {
        let capped = DelayOption::range(800, 200).cap();
        assert_eq!((capped.min_ms, capped.max_ms), (200, 200));
        assert!(!capped.exceeded_cap);
    }

    #[test]
    fn deserializes_number_or_range() {
        let fixed: DelayOption = serde_json::from_str("250").unwrap();
        assert_eq!(fixed, DelayOption::Fixed(250));
        let range: DelayOption = serde_json::from_str(r#"{"min":1,"max":2}"#).unwrap();
        assert_eq!(range, DelayOption::Range { min: 1, max: 2 });
    }

    #[test]
    fn fractional_milliseconds_are_rejected() {
        assert!(serde_json::from_str::<DelayOption>("250.5").is_err());
        assert!(serde_json::from_str::<DelayOption>(r#"{"min":1.5,"max":2}"#).is_err());
    }
}
