//! HTTP client for the public data feeds used by the news reporter.
//!
//! - ipify for the caller's public address
//! - Open-Meteo for daily weather metrics
//! - the local API for a pre-built fallback battle

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::infrastructure::ports::{Coordinates, LocationForecast, NewsFeedPort, RepoError};

/// Default ipify endpoint.
pub const DEFAULT_IPIFY_URL: &str = "https://api.ipify.org?format=json";

/// Default Open-Meteo forecast endpoint.
pub const DEFAULT_OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Path of the fallback report on the local API.
pub const FALLBACK_REPORT_PATH: &str = "/news/battle/report";

const DAILY_METRICS: &str =
    "temperature_2m_max,wind_speed_10m_max,sunshine_duration,precipitation_sum";
const TIMEZONE: &str = "Asia/Tokyo";

/// reqwest-backed [`NewsFeedPort`].
///
/// No request timeout is configured; callers cancel through the token.
#[derive(Clone)]
pub struct HttpNewsFeed {
    client: Client,
    ipify_url: String,
    open_meteo_url: String,
    api_base_url: String,
}

impl HttpNewsFeed {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            client: Client::new(),
            ipify_url: DEFAULT_IPIFY_URL.to_string(),
            open_meteo_url: DEFAULT_OPEN_METEO_URL.to_string(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Point the external services somewhere else (for recorded fixtures).
    pub fn with_endpoints(mut self, ipify_url: &str, open_meteo_url: &str) -> Self {
        self.ipify_url = ipify_url.to_string();
        self.open_meteo_url = open_meteo_url.to_string();
        self
    }

    fn fallback_url(&self) -> String {
        format!("{}{}", self.api_base_url, FALLBACK_REPORT_PATH)
    }

    async fn get_json<T>(
        &self,
        service: &'static str,
        request: reqwest::RequestBuilder,
        cancel: &CancellationToken,
    ) -> Result<T, RepoError>
    where
        T: serde::de::DeserializeOwned,
    {
        let fetch = async {
            let response = request
                .send()
                .await
                .map_err(|e| RepoError::network(service, e))?;
            let response = ensure_success(service, response)?;
            response
                .json::<T>()
                .await
                .map_err(|e| RepoError::data(format!("{service} returned an unreadable body: {e}")))
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(RepoError::Cancelled),
            result = fetch => result,
        }
    }
}

fn ensure_success(service: &'static str, response: Response) -> Result<Response, RepoError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(RepoError::http(service, status.as_u16()))
    }
}

fn join_coordinates(locations: &[Coordinates], pick: fn(&Coordinates) -> f64) -> String {
    locations
        .iter()
        .map(|c| format!("{:.4}", pick(c)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Open-Meteo answers a single object for one location and an array for many.
#[derive(Deserialize)]
#[serde(untagged)]
enum ForecastBody {
    Many(Vec<LocationForecast>),
    One(LocationForecast),
}

#[derive(Deserialize)]
struct IpifyBody {
    ip: String,
}

#[async_trait]
impl NewsFeedPort for HttpNewsFeed {
    async fn public_ip(&self, cancel: &CancellationToken) -> Result<String, RepoError> {
        let body: IpifyBody = self
            .get_json("ipify", self.client.get(&self.ipify_url), cancel)
            .await?;
        let ip = body.ip.trim().to_string();
        if ip.is_empty() {
            return Err(RepoError::data("ipify returned an empty address"));
        }
        Ok(ip)
    }

    async fn weather_forecast(
        &self,
        locations: &[Coordinates],
        cancel: &CancellationToken,
    ) -> Result<Vec<LocationForecast>, RepoError> {
        let request = self.client.get(&self.open_meteo_url).query(&[
            ("latitude", join_coordinates(locations, |c| c.latitude)),
            ("longitude", join_coordinates(locations, |c| c.longitude)),
            ("daily", DAILY_METRICS.to_string()),
            ("timezone", TIMEZONE.to_string()),
            ("past_days", "1".to_string()),
            ("forecast_days", "1".to_string()),
        ]);

        let body: ForecastBody = self.get_json("open-meteo", request, cancel).await?;
        Ok(match body {
            ForecastBody::Many(forecasts) => forecasts,
            ForecastBody::One(forecast) => vec![forecast],
        })
    }

    async fn fallback_report(
        &self,
        cancel: &CancellationToken,
    ) -> Result<serde_json::Value, RepoError> {
        let url = self.fallback_url();
        tracing::debug!(url = %url, "Requesting fallback battle report");
        self.get_json("local-api", self.client.get(url), cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_url_trims_trailing_slash() {
        let feed = HttpNewsFeed::new("http://localhost:5173/");
        assert_eq!(
            feed.fallback_url(),
            "http://localhost:5173/news/battle/report"
        );
    }

    #[test]
    fn coordinates_join_in_order() {
        let locations = [Coordinates::new(35.8849, 139.6286), Coordinates::new(35.6346, 139.5786)];
        assert_eq!(
            join_coordinates(&locations, |c| c.latitude),
            "35.8849,35.6346"
        );
        assert_eq!(
            join_coordinates(&locations, |c| c.longitude),
            "139.6286,139.5786"
        );
    }

    #[test]
    fn forecast_body_accepts_single_object_or_array() {
        let many: ForecastBody = serde_json::from_str(
            r#"[{"latitude":1.0,"daily":{"time":["2026-01-01"],"temperature_2m_max":[3.5]}},{}]"#,
        )
        .unwrap();
        assert!(matches!(many, ForecastBody::Many(ref v) if v.len() == 2));

        let one: ForecastBody =
            serde_json::from_str(r#"{"latitude":1.0,"longitude":2.0}"#).unwrap();
        assert!(matches!(one, ForecastBody::One(_)));
    }

    #[tokio::test]
    async fn cancelled_token_short_circuits_request() {
        let feed = HttpNewsFeed::new("http://127.0.0.1:9");
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = feed.fallback_report(&cancel).await;
        assert_eq!(result, Err(RepoError::Cancelled));
    }

    #[tokio::test]
    async fn cancelled_token_short_circuits_external_services() {
        let feed = HttpNewsFeed::new("http://127.0.0.1:9")
            .with_endpoints("http://127.0.0.1:9/ip", "http://127.0.0.1:9/forecast");
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert_eq!(feed.public_ip(&cancel).await, Err(RepoError::Cancelled));
        assert_eq!(
            feed.weather_forecast(&[Coordinates::new(1.0, 2.0)], &cancel)
                .await,
            Err(RepoError::Cancelled)
        );
    }

    mod http {
        use super::*;
        use wiremock::matchers::{method, path, query_param};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        fn feed(server: &MockServer) -> HttpNewsFeed {
            HttpNewsFeed::new(&server.uri()).with_endpoints(
                &format!("{}/ip", server.uri()),
                &format!("{}/v1/forecast", server.uri()),
            )
        }

        #[tokio::test]
        async fn non_success_status_is_http_error() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path(FALLBACK_REPORT_PATH))
                .respond_with(ResponseTemplate::new(503))
                .mount(&server)
                .await;

            let result = feed(&server)
                .fallback_report(&CancellationToken::new())
                .await;
            assert_eq!(result, Err(RepoError::http("local-api", 503)));
        }

        #[tokio::test]
        async fn unreadable_body_is_data_error() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/ip"))
                .respond_with(ResponseTemplate::new(200).set_body_string("nope!"))
                .mount(&server)
                .await;

            let result = feed(&server).public_ip(&CancellationToken::new()).await;
            assert!(matches!(result, Err(RepoError::Data(_))), "got {result:?}");
        }

        #[tokio::test]
        async fn refused_connection_is_network_error() {
            let port = std::net::TcpListener::bind("127.0.0.1:0")
                .unwrap()
                .local_addr()
                .unwrap()
                .port();
            let feed = HttpNewsFeed::new(&format!("http://127.0.0.1:{port}"));

            let result = feed.fallback_report(&CancellationToken::new()).await;
            assert!(
                matches!(result, Err(RepoError::Network { service: "local-api", .. })),
                "got {result:?}"
            );
            assert!(result.unwrap_err().is_recoverable_source_failure());
        }

        #[tokio::test]
        async fn reads_address_and_forecasts() {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/ip"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ip": " 203.0.113.7 " })),
                )
                .mount(&server)
                .await;
            Mock::given(method("GET"))
                .and(path("/v1/forecast"))
                .and(query_param("latitude", "35.8849,35.6346"))
                .and(query_param("timezone", TIMEZONE))
                .and(query_param("past_days", "1"))
                .and(query_param("forecast_days", "1"))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                    { "latitude": 35.88, "daily": { "time": ["2026-10-17"] } },
                    { "latitude": 35.63 }
                ])))
                .mount(&server)
                .await;

            let feed = feed(&server);
            let cancel = CancellationToken::new();
            assert_eq!(feed.public_ip(&cancel).await, Ok("203.0.113.7".to_string()));

            let forecasts = feed
                .weather_forecast(
                    &[Coordinates::new(35.8849, 139.6286), Coordinates::new(35.6346, 139.5786)],
                    &cancel,
                )
                .await
                .unwrap();
            assert_eq!(forecasts.len(), 2);
            assert_eq!(forecasts[0].latitude, Some(35.88));
        }
    }
}
