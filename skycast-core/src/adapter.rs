//! Pure transformation of raw WeatherAPI.com payloads into the internal model.
//!
//! Every leaf field is decoded as optional and then required with its JSON
//! path, so a missing required field fails with
//! [`WeatherError::MalformedResponse`] naming that path instead of leaking a
//! zeroed value downstream. No I/O happens here; HTTP status classification
//! belongs to the fetch boundary in [`crate::provider`].

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    error::WeatherError,
    model::{AirQuality, Coordinates, ForecastPoint, Units, WeatherSnapshot},
};

/// Spread applied around the current reading to estimate the daily range when
/// the provider gives only a point reading. An estimate, not measured data.
const TEMP_SPREAD_METRIC: f64 = 2.0;
const TEMP_SPREAD_IMPERIAL: f64 = 4.0;

/// The provider reports wind in km/h; the model carries m/s.
const KPH_PER_MPS: f64 = 3.6;

/// Adapt a `current.json` body into a [`WeatherSnapshot`].
pub fn adapt_current(body: &str, units: Units) -> Result<WeatherSnapshot, WeatherError> {
    let raw: RawCurrentResponse = parse(body)?;

    let location = require(raw.location, "location")?;
    let current = require(raw.current, "current")?;

    let condition_text = require(
        require(current.condition, "current.condition")?.text,
        "current.condition.text",
    )?;

    let (temperature, feels_like, spread) = match units {
        Units::Metric => (
            require(current.temp_c, "current.temp_c")?,
            require(current.feelslike_c, "current.feelslike_c")?,
            TEMP_SPREAD_METRIC,
        ),
        Units::Imperial => (
            require(current.temp_f, "current.temp_f")?,
            require(current.feelslike_f, "current.feelslike_f")?,
            TEMP_SPREAD_IMPERIAL,
        ),
    };

    Ok(WeatherSnapshot {
        location_name: require(location.name, "location.name")?,
        country_code: require(location.country, "location.country")?,
        coordinates: Coordinates {
            lat: require(location.lat, "location.lat")?,
            lon: require(location.lon, "location.lon")?,
        },
        temperature,
        feels_like,
        temperature_min: temperature - spread,
        temperature_max: temperature + spread,
        pressure_hpa: require(current.pressure_mb, "current.pressure_mb")?,
        humidity_pct: require(current.humidity, "current.humidity")?,
        // The provider has a single free-text condition field; it serves as
        // both the coarse category and the description.
        condition_main: condition_text.clone(),
        condition_description: condition_text,
        wind_speed_mps: require(current.wind_kph, "current.wind_kph")? / KPH_PER_MPS,
        visibility_m: require(current.vis_km, "current.vis_km")? * 1000.0,
    })
}

/// Adapt a `forecast.json` body into a flat, time-ordered point list.
///
/// One daily-granularity point per forecast day (timestamped at the day
/// epoch, carrying the provider's true day min/max), plus hourly points for
/// the first day only, which feed the hourly strip. Output is non-decreasing
/// by timestamp.
pub fn adapt_forecast(body: &str, units: Units) -> Result<Vec<ForecastPoint>, WeatherError> {
    let raw: RawForecastResponse = parse(body)?;

    let days = require(
        require(raw.forecast, "forecast")?.forecastday,
        "forecast.forecastday",
    )?;

    let mut points = Vec::new();
    for (i, day) in days.into_iter().enumerate() {
        let prefix = format!("forecast.forecastday[{i}]");

        let date_epoch = require(day.date_epoch, &format!("{prefix}.date_epoch"))?;
        let summary = require(day.day, &format!("{prefix}.day"))?;
        let condition_text = require(
            require(summary.condition, &format!("{prefix}.day.condition"))?.text,
            &format!("{prefix}.day.condition.text"),
        )?;

        let (avg, min, max) = match units {
            Units::Metric => (
                require(summary.avgtemp_c, &format!("{prefix}.day.avgtemp_c"))?,
                require(summary.mintemp_c, &format!("{prefix}.day.mintemp_c"))?,
                require(summary.maxtemp_c, &format!("{prefix}.day.maxtemp_c"))?,
            ),
            Units::Imperial => (
                require(summary.avgtemp_f, &format!("{prefix}.day.avgtemp_f"))?,
                require(summary.mintemp_f, &format!("{prefix}.day.mintemp_f"))?,
                require(summary.maxtemp_f, &format!("{prefix}.day.maxtemp_f"))?,
            ),
        };

        points.push(ForecastPoint {
            timestamp: epoch_to_utc(date_epoch, &format!("{prefix}.date_epoch"))?,
            temperature: avg,
            temperature_min: Some(min),
            temperature_max: Some(max),
            condition_main: condition_text.clone(),
            condition_description: Some(condition_text),
        });

        // Hourly strip entries come from the first forecast day only; the
        // provider tags hours with the coarse label alone.
        if i == 0 {
            for (j, hour) in day.hour.unwrap_or_default().into_iter().enumerate() {
                let hour_prefix = format!("{prefix}.hour[{j}]");

                let time_epoch = require(hour.time_epoch, &format!("{hour_prefix}.time_epoch"))?;
                let temperature = match units {
                    Units::Metric => require(hour.temp_c, &format!("{hour_prefix}.temp_c"))?,
                    Units::Imperial => require(hour.temp_f, &format!("{hour_prefix}.temp_f"))?,
                };
                let condition_text = require(
                    require(hour.condition, &format!("{hour_prefix}.condition"))?.text,
                    &format!("{hour_prefix}.condition.text"),
                )?;

                points.push(ForecastPoint {
                    timestamp: epoch_to_utc(time_epoch, &format!("{hour_prefix}.time_epoch"))?,
                    temperature,
                    temperature_min: None,
                    temperature_max: None,
                    condition_main: condition_text,
                    condition_description: None,
                });
            }
        }
    }

    Ok(points)
}

/// Adapt a `current.json` body (requested with `aqi=yes`) into an
/// [`AirQuality`] value.
///
/// The provider's `us-epa-index` runs 1-6; it is folded into the internal 1-5
/// scale. A missing, non-numeric or out-of-range index never fails: it
/// defaults toward the valid range, absent values to 1 ("Good").
pub fn adapt_air_quality(body: &str) -> Result<AirQuality, WeatherError> {
    let raw: RawCurrentResponse = parse(body)?;

    let epa_index = raw
        .current
        .and_then(|c| c.air_quality)
        .and_then(|aq| aq.us_epa_index)
        .and_then(|v| v.as_f64())
        .map_or(1, |v| v.clamp(1.0, 5.0) as u8);

    Ok(AirQuality { epa_index })
}

fn parse<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, WeatherError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::debug!(error = %e, "failed to decode provider JSON");
        WeatherError::malformed("$")
    })
}

fn require<T>(value: Option<T>, path: &str) -> Result<T, WeatherError> {
    value.ok_or_else(|| WeatherError::malformed(path))
}

fn epoch_to_utc(ts: i64, path: &str) -> Result<DateTime<Utc>, WeatherError> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| WeatherError::malformed(path))
}

#[derive(Debug, Deserialize)]
struct RawCurrentResponse {
    location: Option<RawLocation>,
    current: Option<RawCurrent>,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    name: Option<String>,
    country: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawCondition {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCurrent {
    temp_c: Option<f64>,
    temp_f: Option<f64>,
    feelslike_c: Option<f64>,
    feelslike_f: Option<f64>,
    pressure_mb: Option<f64>,
    humidity: Option<u8>,
    condition: Option<RawCondition>,
    wind_kph: Option<f64>,
    vis_km: Option<f64>,
    air_quality: Option<RawAirQuality>,
}

#[derive(Debug, Deserialize)]
struct RawAirQuality {
    #[serde(rename = "us-epa-index")]
    us_epa_index: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawForecastResponse {
    forecast: Option<RawForecast>,
}

#[derive(Debug, Deserialize)]
struct RawForecast {
    forecastday: Option<Vec<RawForecastDay>>,
}

#[derive(Debug, Deserialize)]
struct RawForecastDay {
    date_epoch: Option<i64>,
    day: Option<RawDaySummary>,
    hour: Option<Vec<RawForecastHour>>,
}

#[derive(Debug, Deserialize)]
struct RawDaySummary {
    avgtemp_c: Option<f64>,
    avgtemp_f: Option<f64>,
    maxtemp_c: Option<f64>,
    maxtemp_f: Option<f64>,
    mintemp_c: Option<f64>,
    mintemp_f: Option<f64>,
    condition: Option<RawCondition>,
}

#[derive(Debug, Deserialize)]
struct RawForecastHour {
    time_epoch: Option<i64>,
    temp_c: Option<f64>,
    temp_f: Option<f64>,
    condition: Option<RawCondition>,
}
