use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::error::WeatherError;

use super::WeatherFetcher;

pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";

/// Fetcher for WeatherAPI.com, authenticated via the `key` query parameter.
#[derive(Debug, Clone)]
pub struct WeatherApiFetcher {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiFetcher {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Base URL override, used to point the fetcher at a test server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    async fn get_raw(
        &self,
        endpoint: &str,
        query: &str,
        params: &[(&str, &str)],
    ) -> Result<String, WeatherError> {
        let url = format!("{}/{endpoint}", self.base_url);

        debug!(endpoint, query, "requesting provider endpoint");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", query)])
            .query(params)
            .send()
            .await
            .map_err(|e| WeatherError::ProviderUnavailable { reason: e.to_string() })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| WeatherError::ProviderUnavailable { reason: e.to_string() })?;

        if let Some(err) = classify_status(status, query, &body) {
            return Err(err);
        }

        Ok(body)
    }
}

#[async_trait]
impl WeatherFetcher for WeatherApiFetcher {
    async fn fetch_current(&self, query: &str) -> Result<String, WeatherError> {
        self.get_raw("current.json", query, &[("aqi", "yes")]).await
    }

    async fn fetch_forecast(&self, query: &str, days: u8) -> Result<String, WeatherError> {
        let days = days.to_string();
        self.get_raw(
            "forecast.json",
            query,
            &[("days", days.as_str()), ("aqi", "no"), ("alerts", "no")],
        )
        .await
    }

    async fn fetch_air_quality(&self, lat: f64, lon: f64) -> Result<String, WeatherError> {
        self.get_raw("current.json", &format!("{lat},{lon}"), &[("aqi", "yes")]).await
    }
}

/// Map a non-2xx response onto the error taxonomy.
///
/// The provider signals "no matching location" with HTTP 400; other client
/// errors (bad key, exhausted quota) are provider-side problems from the
/// caller's point of view and must not read as a bad city name.
fn classify_status(status: StatusCode, query: &str, body: &str) -> Option<WeatherError> {
    if status.is_success() {
        return None;
    }

    if status == StatusCode::BAD_REQUEST {
        return Some(WeatherError::LocationNotFound { query: query.to_string() });
    }

    Some(WeatherError::ProviderUnavailable {
        reason: format!("HTTP {status}: {}", truncate_body(body)),
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
