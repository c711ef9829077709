//! Core library for the weather lookup service.
//!
//! This crate defines:
//! - Environment-driven configuration
//! - The error taxonomy shared with the HTTP boundary
//! - Shared domain models (queries, summaries)
//! - The OpenWeather upstream client behind a provider trait
//!
//! It is used by `weather-server`, but can also be reused by other binaries.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::WeatherError;
pub use model::{WeatherQuery, WeatherSummary};
pub use provider::{OpenWeatherProvider, WeatherProvider};
