//! Composition boundary between the fetch layer and the pure core.
//!
//! The presentation layer talks to [`WeatherService`] only; each method
//! composes one fetch with the matching pure transformation and returns a
//! [`WeatherError`] the caller can show via
//! [`user_message`](WeatherError::user_message).

use chrono::Utc;

use crate::{
    adapter,
    aggregate::aggregate_daily,
    error::WeatherError,
    model::{AirQuality, Coordinates, DailySummary, ForecastPoint, Units, WeatherSnapshot},
    provider::WeatherFetcher,
};

/// Provider query that resolves the caller's location from their IP address.
pub const IP_LOOKUP_QUERY: &str = "auto:ip";

#[derive(Debug)]
pub struct WeatherService {
    fetcher: Box<dyn WeatherFetcher>,
}

impl WeatherService {
    pub fn new(fetcher: Box<dyn WeatherFetcher>) -> Self {
        Self { fetcher }
    }

    /// Current conditions for a city name or "lat,lon" query.
    pub async fn snapshot(
        &self,
        query: &str,
        units: Units,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let body = self.fetcher.fetch_current(query).await?;
        adapter::adapt_current(&body, units)
    }

    /// Current conditions for the device's own location, resolved by IP.
    ///
    /// A failed resolution is reported as [`WeatherError::GeolocationDenied`]
    /// so callers can fall back to a default location instead of blocking.
    pub async fn locate_snapshot(&self, units: Units) -> Result<WeatherSnapshot, WeatherError> {
        match self.snapshot(IP_LOOKUP_QUERY, units).await {
            Err(WeatherError::LocationNotFound { .. }) => Err(WeatherError::GeolocationDenied),
            other => other,
        }
    }

    /// Flat, time-ordered forecast points: one per provider day plus the
    /// first day's hourly strip.
    pub async fn forecast_points(
        &self,
        query: &str,
        units: Units,
        days: u8,
    ) -> Result<Vec<ForecastPoint>, WeatherError> {
        let body = self.fetcher.fetch_forecast(query, days).await?;
        adapter::adapt_forecast(&body, units)
    }

    /// Daily summaries for the days after today, at most `max_days` of them.
    pub async fn daily_forecast(
        &self,
        query: &str,
        units: Units,
        max_days: usize,
    ) -> Result<Vec<DailySummary>, WeatherError> {
        // One extra provider day: today is present in the payload but
        // excluded from the summaries.
        let span = max_days.saturating_add(1).min(u8::MAX as usize) as u8;
        let points = self.forecast_points(query, units, span).await?;
        Ok(aggregate_daily(&points, Utc::now(), max_days))
    }

    pub async fn air_quality(&self, coords: Coordinates) -> Result<AirQuality, WeatherError> {
        let body = self.fetcher.fetch_air_quality(coords.lat, coords.lon).await?;
        adapter::adapt_air_quality(&body)
    }
}
