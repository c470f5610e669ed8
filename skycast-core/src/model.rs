use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Unit system requested by the caller.
///
/// Threaded through every adapter call rather than stored on any entity,
/// so the same raw payload can be reinterpreted without re-fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Metric, Units::Imperial]
    }

    /// Degree suffix for display, e.g. "°C" or "°F".
    pub fn degrees(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => Err(anyhow::anyhow!(
                "Unknown unit system '{value}'. Supported: metric, imperial."
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Current conditions for one location.
///
/// All temperature fields share the unit family that was requested when the
/// snapshot was adapted; `temperature_min`/`temperature_max` are a fixed-offset
/// estimate around the current reading, so `min <= temperature <= max` is not
/// guaranteed to mean anything beyond that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub country_code: String,
    pub coordinates: Coordinates,
    pub temperature: f64,
    pub feels_like: f64,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub pressure_hpa: f64,
    pub humidity_pct: u8,
    /// Coarse condition category, e.g. "Sunny".
    pub condition_main: String,
    /// Human-readable condition text.
    pub condition_description: String,
    pub wind_speed_mps: f64,
    pub visibility_m: f64,
}

/// One timestamped forecast reading, at hourly or daily granularity.
///
/// Daily-granularity points carry the provider's true day min/max; hourly
/// points leave them absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
    pub temperature_min: Option<f64>,
    pub temperature_max: Option<f64>,
    pub condition_main: String,
    pub condition_description: Option<String>,
}

/// Air quality on the internal 1-5 EPA-style scale (1 = Good, 5 = Very Poor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirQuality {
    pub epa_index: u8,
}

impl AirQuality {
    pub fn label(&self) -> &'static str {
        match self.epa_index {
            1 => "Good",
            2 => "Moderate",
            3 => "Unhealthy for sensitive groups",
            4 => "Unhealthy",
            _ => "Very poor",
        }
    }
}

impl Default for AirQuality {
    fn default() -> Self {
        Self { epa_index: 1 }
    }
}

impl std::fmt::Display for AirQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.epa_index, self.label())
    }
}

/// One representative forecast entry per calendar day (UTC).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub condition_main: String,
    pub condition_description: Option<String>,
}
