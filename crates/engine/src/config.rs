//! Engine configuration from environment variables.
//!
//! Supported environment variables:
//! - YONOKOMAE_FAST_DELAYS: skip simulated waits (delays are still capped and logged)
//! - YONOKOMAE_API_BASE_URL: base URL for the local fallback report endpoint
//! - YONOKOMAE_NEWS_CACHE_TTL_MS: news cache lifetime, 0 disables caching
//! - YONOKOMAE_REPORT_DELAY_MS / YONOKOMAE_REPORT_DELAY_MAX_MS: fixed or ranged report delay
//! - YONOKOMAE_JUDGEMENT_DELAY_MS: fixed judgement delay
//! - YONOKOMAE_FAKE_JUDGEMENT: route every mode's judgement through the fake judge
//! - YONOKOMAE_JOKES_DEFAULT_POWER / YONOKOMAE_JOKES_ATTRIBUTION: random-jokes decoration
//! - YONOKOMAE_MODE: play mode for the runner binary
//!
//! Malformed values are ignored with a warning and the default is kept.

use std::time::Duration;

use yonokomae_domain::DelayOption;

use crate::repositories::news_reporter::DEFAULT_NEWS_CACHE_TTL;
use crate::repositories::random_jokes::{DEFAULT_ATTRIBUTION, DEFAULT_JOKE_POWER};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5173";
pub const DEFAULT_MODE: &str = "demo";
pub const DEFAULT_REPORT_DELAY_MIN_MS: i64 = 300;
pub const DEFAULT_REPORT_DELAY_MAX_MS: i64 = 1_200;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub fast_delays: bool,
    pub api_base_url: String,
    pub news_cache_ttl: Duration,
    pub report_delay: Option<DelayOption>,
    pub judgement_delay: Option<DelayOption>,
    pub fake_judgement: bool,
    pub jokes_default_power: f64,
    pub jokes_attribution: String,
    pub mode: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fast_delays: false,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            news_cache_ttl: DEFAULT_NEWS_CACHE_TTL,
            report_delay: Some(DelayOption::range(
                DEFAULT_REPORT_DELAY_MIN_MS,
                DEFAULT_REPORT_DELAY_MAX_MS,
            )),
            judgement_delay: None,
            fake_judgement: false,
            jokes_default_power: DEFAULT_JOKE_POWER,
            jokes_attribution: DEFAULT_ATTRIBUTION.to_string(),
            mode: DEFAULT_MODE.to_string(),
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(val) = get("YONOKOMAE_FAST_DELAYS") {
            config.fast_delays = parse_flag("YONOKOMAE_FAST_DELAYS", &val, config.fast_delays);
        }

        if let Some(val) = get("YONOKOMAE_API_BASE_URL") {
            config.api_base_url = val.trim_end_matches('/').to_string();
        }

        if let Some(val) = get("YONOKOMAE_NEWS_CACHE_TTL_MS") {
            if let Some(ms) = parse_number::<u64>("YONOKOMAE_NEWS_CACHE_TTL_MS", &val) {
                config.news_cache_ttl = Duration::from_millis(ms);
            }
        }

        let report_min = get("YONOKOMAE_REPORT_DELAY_MS")
            .and_then(|val| parse_number::<i64>("YONOKOMAE_REPORT_DELAY_MS", &val));
        let report_max = get("YONOKOMAE_REPORT_DELAY_MAX_MS")
            .and_then(|val| parse_number::<i64>("YONOKOMAE_REPORT_DELAY_MAX_MS", &val));
        match (report_min, report_max) {
            (Some(min), Some(max)) => config.report_delay = Some(DelayOption::range(min, max)),
            (Some(ms), None) => config.report_delay = Some(DelayOption::fixed(ms)),
            (None, Some(max)) => {
                config.report_delay = Some(DelayOption::range(DEFAULT_REPORT_DELAY_MIN_MS, max))
            }
            (None, None) => {}
        }

        if let Some(val) = get("YONOKOMAE_JUDGEMENT_DELAY_MS") {
            if let Some(ms) = parse_number::<i64>("YONOKOMAE_JUDGEMENT_DELAY_MS", &val) {
                config.judgement_delay = (ms != 0).then(|| DelayOption::fixed(ms));
            }
        }

        if let Some(val) = get("YONOKOMAE_FAKE_JUDGEMENT") {
            config.fake_judgement =
                parse_flag("YONOKOMAE_FAKE_JUDGEMENT", &val, config.fake_judgement);
        }

        if let Some(val) = get("YONOKOMAE_JOKES_DEFAULT_POWER") {
            match parse_number::<f64>("YONOKOMAE_JOKES_DEFAULT_POWER", &val) {
                Some(power) if power.is_finite() => config.jokes_default_power = power,
                Some(power) => {
                    tracing::warn!(power, "YONOKOMAE_JOKES_DEFAULT_POWER is not finite, ignoring")
                }
                None => {}
            }
        }

        if let Some(val) = get("YONOKOMAE_JOKES_ATTRIBUTION") {
            config.jokes_attribution = val;
        }

        if let Some(val) = get("YONOKOMAE_MODE") {
            config.mode = val;
        }

        config
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, val: &str) -> Option<T> {
    match val.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!(key, val = %val, "Invalid numeric environment value, ignoring");
            None
        }
    }
}

fn parse_flag(key: &str, val: &str, default: bool) -> bool {
    match val.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!(key, val = %val, "Invalid boolean environment value, ignoring");
            default
        }
    }
}
