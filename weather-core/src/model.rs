use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// A validated city lookup. Lives only for the duration of one request.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    city: String,
}

impl WeatherQuery {
    /// Build a query from raw user input. Surrounding whitespace is
    /// trimmed; an empty result is rejected.
    pub fn parse(raw: &str) -> Result<Self, WeatherError> {
        let city = raw.trim();
        if city.is_empty() {
            return Err(WeatherError::InvalidInput);
        }

        Ok(Self {
            city: city.to_string(),
        })
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Simplified current conditions, built from one successful upstream
/// payload and never mutated afterwards. Serializes in camelCase to match
/// the wire contract (`feelsLike`, `windSpeed`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSummary {
    pub city: String,
    pub country: String,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Degrees Celsius.
    pub feels_like: f64,
    /// Percent.
    pub humidity: u64,
    /// Hectopascals.
    pub pressure: u64,
    /// Meters per second.
    pub wind_speed: f64,
    pub description: String,
    /// Opaque icon identifier from the upstream provider.
    pub icon: String,
    /// Taken at translation time, ISO-8601 on the wire.
    pub timestamp: DateTime<Utc>,
}
