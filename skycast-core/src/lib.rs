//! Core library for the `skycast` weather dashboard.
//!
//! This crate defines:
//! - The normalized weather model (snapshots, forecast points, air quality)
//! - A pure adapter from raw provider JSON into that model
//! - Daily bucketing of forecast points into per-day summaries
//! - The fetch boundary and the composition service on top of it
//! - Local persistence for configuration, search history and favorites
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod adapter;
pub mod aggregate;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod service;
pub mod store;

pub use aggregate::aggregate_daily;
pub use config::Config;
pub use error::WeatherError;
pub use model::{AirQuality, Coordinates, DailySummary, ForecastPoint, Units, WeatherSnapshot};
pub use provider::{WeatherFetcher, weatherapi::WeatherApiFetcher};
pub use service::WeatherService;
pub use store::Store;
