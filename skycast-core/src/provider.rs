//! Fetch boundary for the upstream weather provider.
//!
//! Implementations return raw JSON bodies for the pure adapter layer to
//! decode. Classifying HTTP failures into [`WeatherError`] happens here,
//! before the adapter ever runs.

use crate::error::WeatherError;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

#[async_trait]
pub trait WeatherFetcher: Send + Sync + Debug {
    /// Raw current-conditions body for a city name or "lat,lon" query.
    async fn fetch_current(&self, query: &str) -> Result<String, WeatherError>;

    /// Raw forecast body spanning `days` provider days.
    async fn fetch_forecast(&self, query: &str, days: u8) -> Result<String, WeatherError>;

    /// Raw air-quality body for a coordinate pair.
    async fn fetch_air_quality(&self, lat: f64, lon: f64) -> Result<String, WeatherError>;
}
