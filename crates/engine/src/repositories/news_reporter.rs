//! Live battles built from public data feeds.
//!
//! Each report picks a source (network identity or weather), falls back to
//! the local API when that source fails, and keeps the last battle in a
//! single-slot TTL cache.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use yonokomae_domain::{
    parse_battle, Battle, BattleStatus, DelayOption, Narrative, Neta, Provenance, PublishState,
    Significance,
};

use crate::infrastructure::cache::TtlSlot;
use crate::infrastructure::delay::Delayer;
use crate::infrastructure::ports::{
    BattleReportRepo, ClockPort, Coordinates, LocationForecast, NewsFeedPort, RandomPort,
    RepoError,
};

/// Yono station area.
pub const YONO_COORDINATES: Coordinates = Coordinates::new(35.8849, 139.6286);
/// Komae station area.
pub const KOMAE_COORDINATES: Coordinates = Coordinates::new(35.6346, 139.5786);

pub const DEFAULT_NEWS_CACHE_TTL: Duration = Duration::from_millis(30_000);

/// Share of reports the default chooser sends to the network identity source.
pub const NETWORK_IDENTITY_SHARE: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsSource {
    NetworkIdentity,
    Weather,
}

impl NewsSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NetworkIdentity => "network-identity",
            Self::Weather => "weather",
        }
    }
}

/// Picks the source for the next uncached report.
pub type SourceChooser = Arc<dyn Fn() -> NewsSource + Send + Sync>;

/// Picks an index in `0..count` among weather variants.
pub type VariantChooser = Arc<dyn Fn(usize) -> usize + Send + Sync>;

pub struct NewsReporterApiRepo {
    feed: Arc<dyn NewsFeedPort>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
    delayer: Arc<Delayer>,
    delay: Option<DelayOption>,
    cache: TtlSlot<Battle>,
    choose_source: SourceChooser,
    choose_variant: VariantChooser,
}

impl NewsReporterApiRepo {
    pub fn new(
        feed: Arc<dyn NewsFeedPort>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        delayer: Arc<Delayer>,
        delay: Option<DelayOption>,
    ) -> Self {
        let source_random = Arc::clone(&random);
        let choose_source: SourceChooser = Arc::new(move || {
            if source_random.unit() < NETWORK_IDENTITY_SHARE {
                NewsSource::NetworkIdentity
            } else {
                NewsSource::Weather
            }
        });
        let variant_random = Arc::clone(&random);
        let choose_variant: VariantChooser = Arc::new(move |count| {
            let last = count.saturating_sub(1) as i64;
            variant_random.gen_range(0, last).clamp(0, last) as usize
        });

        Self {
            cache: TtlSlot::new(DEFAULT_NEWS_CACHE_TTL, Arc::clone(&clock)),
            feed,
            clock,
            random,
            delayer,
            delay,
            choose_source,
            choose_variant,
        }
    }

    /// Replace the cache TTL. Zero disables caching.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = TtlSlot::new(ttl, Arc::clone(&self.clock));
        self
    }

    pub fn with_source_chooser(mut self, chooser: SourceChooser) -> Self {
        self.choose_source = chooser;
        self
    }

    pub fn with_variant_chooser(mut self, chooser: VariantChooser) -> Self {
        self.choose_variant = chooser;
        self
    }

    async fn build_from_source(
        &self,
        source: NewsSource,
        cancel: &CancellationToken,
    ) -> Result<Battle, RepoError> {
        match source {
            NewsSource::NetworkIdentity => {
                let ip = self.feed.public_ip(cancel).await?;
                battle_from_address(&ip, self.battle_id())
            }
            NewsSource::Weather => {
                let forecasts = self
                    .feed
                    .weather_forecast(&[YONO_COORDINATES, KOMAE_COORDINATES], cancel)
                    .await?;
                let snapshot = WeatherSnapshot::from_forecasts(&forecasts)?;
                let mut variants = snapshot.variants(&self.battle_id());
                let index = (self.choose_variant)(variants.len()).min(variants.len() - 1);
                Ok(variants.swap_remove(index))
            }
        }
    }

    async fn fetch_fallback(&self, cancel: &CancellationToken) -> Result<Battle, RepoError> {
        let raw = self.feed.fallback_report(cancel).await?;
        parse_battle(&raw).map_err(|e| RepoError::data(format!("fallback report rejected: {e}")))
    }

    fn battle_id(&self) -> String {
        format!("news-{}", self.random.gen_uuid())
    }
}

#[async_trait]
impl BattleReportRepo for NewsReporterApiRepo {
    async fn generate_report(
        &self,
        cancel: Option<&CancellationToken>,
    ) -> Result<Battle, RepoError> {
        self.delayer.apply(self.delay.as_ref(), cancel).await?;

        if let Some(cached) = self.cache.get().await {
            tracing::debug!(battle_id = %cached.id, "Serving cached news battle");
            return Ok(cached);
        }

        let cancel = cancel.cloned().unwrap_or_else(CancellationToken::new);
        let source = (self.choose_source)();
        let battle = match self.build_from_source(source, &cancel).await {
            Ok(battle) => battle,
            Err(e) if e.is_recoverable_source_failure() => {
                tracing::warn!(
                    source = source.as_str(),
                    error = %e,
                    "News source failed, using local fallback"
                );
                self.fetch_fallback(&cancel).await?
            }
            Err(e) => return Err(e),
        };

        if cancel.is_cancelled() {
            return Err(RepoError::Cancelled);
        }

        tracing::info!(source = source.as_str(), battle_id = %battle.id, "Generated news battle");
        self.cache.store(battle.clone()).await;
        Ok(battle)
    }
}

// =============================================================================
// Network identity
// =============================================================================

/// Address-derived powers fall in `[FLOOR, FLOOR + SPAN - 1]`.
const ADDRESS_POWER_FLOOR: u64 = 20;
const ADDRESS_POWER_SPAN: u64 = 81;

/// Hash the decimal digits of an address into two stable powers in `[20, 100]`.
fn address_powers(address: &str) -> Option<(f64, f64)> {
    let mut digits = address.chars().filter_map(|c| c.to_digit(10)).peekable();
    digits.peek()?;
    let hash = digits.fold(0xcbf2_9ce4_8422_2325_u64, |acc, d| {
        (acc ^ u64::from(d)).wrapping_mul(0x0100_0000_01b3)
    });
    let yono = ADDRESS_POWER_FLOOR + hash % ADDRESS_POWER_SPAN;
    let komae = ADDRESS_POWER_FLOOR + (hash / ADDRESS_POWER_SPAN) % ADDRESS_POWER_SPAN;
    Some((yono as f64, komae as f64))
}

fn battle_from_address(address: &str, id: String) -> Result<Battle, RepoError> {
    let (yono_power, komae_power) = address_powers(address)
        .ok_or_else(|| RepoError::data(format!("address '{address}' contains no digits")))?;

    Ok(Battle {
        id,
        title: "Network Identity Showdown".to_string(),
        subtitle: "Your address picks a side".to_string(),
        theme_id: "network".to_string(),
        significance: Significance::Low,
        narrative: Narrative::new(
            format!("Today's reporter is connecting from {address}."),
            format!("The digits of {address} have been weighed for both towns."),
        ),
        yono: Neta::new(
            "Yono Uplink",
            "Northern relay",
            format!("Signal strength read from {address}."),
            yono_power,
        ),
        komae: Neta::new(
            "Komae Uplink",
            "Southern relay",
            format!("Signal strength read from {address}."),
            komae_power,
        ),
        provenance: Some(vec![Provenance::new("Public address lookup (ipify)")
            .with_url("https://www.ipify.org/")
            .with_note(address.to_string())]),
        publish_state: PublishState::Published,
        status: BattleStatus::Success,
    })
}

// =============================================================================
// Weather
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct DailyMetrics {
    date: String,
    temperature_max_c: f64,
    wind_speed_max_kmh: f64,
    sunshine_hours: f64,
    precipitation_mm: f64,
}

impl DailyMetrics {
    /// Latest day in the series with every metric present.
    fn latest_complete(forecast: &LocationForecast) -> Option<Self> {
        let daily = forecast.daily.as_ref()?;
        (0..daily.time.len()).rev().find_map(|i| {
            Some(Self {
                date: daily.time.get(i)?.clone(),
                temperature_max_c: (*daily.temperature_2m_max.get(i)?)?,
                wind_speed_max_kmh: (*daily.wind_speed_10m_max.get(i)?)?,
                sunshine_hours: (*daily.sunshine_duration.get(i)?)? / 3600.0,
                precipitation_mm: (*daily.precipitation_sum.get(i)?)?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
struct WeatherSnapshot {
    yono: DailyMetrics,
    komae: DailyMetrics,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl WeatherSnapshot {
    fn from_forecasts(forecasts: &[LocationForecast]) -> Result<Self, RepoError> {
        if forecasts.len() < 2 {
            return Err(RepoError::data(format!(
                "expected forecasts for 2 locations, got {}",
                forecasts.len()
            )));
        }
        let yono = DailyMetrics::latest_complete(&forecasts[0])
            .ok_or_else(|| RepoError::data("incomplete daily metrics for Yono"))?;
        let komae = DailyMetrics::latest_complete(&forecasts[1])
            .ok_or_else(|| RepoError::data("incomplete daily metrics for Komae"))?;
        Ok(Self { yono, komae })
    }

    fn provenance(&self) -> Vec<Provenance> {
        vec![Provenance::new("Open-Meteo daily forecast")
            .with_url("https://open-meteo.com/")
            .with_note(format!(
                "Yono {} / Komae {}",
                self.yono.date, self.komae.date
            ))]
    }

    fn battle(
        &self,
        id: String,
        title: &str,
        subtitle: &str,
        metric: &str,
        unit: &str,
        pick: fn(&DailyMetrics) -> f64,
    ) -> Battle {
        let yono = round1(pick(&self.yono));
        let komae = round1(pick(&self.komae));
        Battle {
            id,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            theme_id: "weather".to_string(),
            significance: Significance::Medium,
            narrative: Narrative::new(
                format!("Today's {metric}: Yono {yono}{unit}, Komae {komae}{unit}."),
                format!("The sky over both towns settles the {metric} contest."),
            ),
            yono: Neta::new(
                "Yono Skies",
                self.yono.date.clone(),
                format!("{metric} of {yono}{unit}"),
                yono,
            ),
            komae: Neta::new(
                "Komae Skies",
                self.komae.date.clone(),
                format!("{metric} of {komae}{unit}"),
                komae,
            ),
            provenance: Some(self.provenance()),
            publish_state: PublishState::Published,
            status: BattleStatus::Success,
        }
    }

    /// Candidate battles. The rain variant only appears when it rained.
    fn variants(&self, id: &str) -> Vec<Battle> {
        let mut variants = vec![
            self.battle(
                format!("{id}-heat"),
                "Heat Wave Derby",
                "Who ran hotter today?",
                "maximum temperature",
                "°C",
                |m| m.temperature_max_c,
            ),
            self.battle(
                format!("{id}-wind"),
                "Gale Force Duel",
                "Whose wind blew harder?",
                "peak wind speed",
                " km/h",
                |m| m.wind_speed_max_kmh,
            ),
            self.battle(
                format!("{id}-sun"),
                "Sunshine Standoff",
                "Who soaked up more sun?",
                "sunshine",
                " h",
                |m| m.sunshine_hours,
            ),
        ];
        if self.yono.precipitation_mm + self.komae.precipitation_mm > 0.0 {
            variants.push(self.battle(
                format!("{id}-rain"),
                "Rain Gauge Rumble",
                "Who caught more rain?",
                "rainfall",
                " mm",
                |m| m.precipitation_mm,
            ));
        }
        variants
    }
}
