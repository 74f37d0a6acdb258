//! External service port traits (public data feeds).

use async_trait::async_trait;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use super::error::RepoError;

// =============================================================================
// Weather Types
// =============================================================================

/// A latitude/longitude pair sent to the forecast service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Per-location forecast as returned by the weather service.
///
/// Every field is optional on the wire; completeness is checked by the
/// consumer, not here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocationForecast {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub daily: Option<DailySeries>,
}

/// Column-oriented daily metrics, one entry per day.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DailySeries {
    #[serde(default)]
    pub time: Vec<String>,
    /// Degrees Celsius.
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    /// km/h.
    #[serde(default)]
    pub wind_speed_10m_max: Vec<Option<f64>>,
    /// Seconds of sunshine.
    #[serde(default)]
    pub sunshine_duration: Vec<Option<f64>>,
    /// Millimetres.
    #[serde(default)]
    pub precipitation_sum: Vec<Option<f64>>,
}

// =============================================================================
// News Feed Port
// =============================================================================

/// Outbound calls made by the news reporter repository.
///
/// Implementations must return [`RepoError::Cancelled`] as soon as `cancel`
/// fires, and report non-2xx answers as [`RepoError::Http`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsFeedPort: Send + Sync {
    /// The caller's public network address.
    async fn public_ip(&self, cancel: &CancellationToken) -> Result<String, RepoError>;

    /// Daily metrics for yesterday and today at each location, in order.
    async fn weather_forecast(
        &self,
        locations: &[Coordinates],
        cancel: &CancellationToken,
    ) -> Result<Vec<LocationForecast>, RepoError>;

    /// Pre-built battle from the local API, as raw JSON.
    async fn fallback_report(
        &self,
        cancel: &CancellationToken,
    ) -> Result<serde_json::Value, RepoError>;
}
