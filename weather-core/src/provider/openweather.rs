use std::time::Duration;

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{WeatherError, WeatherSummary};

use super::WeatherProvider;

const API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// The upstream documents no latency bound; cap the wait so a stalled
/// request cannot hold its handler forever.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherSummary, WeatherError> {
        let res = self
            .http
            .get(API_URL)
            .timeout(UPSTREAM_TIMEOUT)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(WeatherError::Unreachable)?;

        let status = res.status();
        let body = res.text().await.map_err(WeatherError::Unreachable)?;

        if status.is_success() {
            return summarize(&body);
        }

        Err(classify_failure(status, &body))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherSummary, WeatherError> {
        self.fetch_current(city).await
    }
}

/// Decode a successful payload into a summary. Any missing field is a hard
/// failure; a half-filled summary must never leave this function.
fn summarize(body: &str) -> Result<WeatherSummary, WeatherError> {
    let parsed: CurrentConditions = serde_json::from_str(body)
        .context("Failed to parse OpenWeather current-conditions JSON")?;

    let condition = parsed
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("OpenWeather payload contained no weather conditions"))?;

    Ok(WeatherSummary {
        city: parsed.name,
        country: parsed.sys.country,
        temperature: parsed.main.temp,
        feels_like: parsed.main.feels_like,
        humidity: parsed.main.humidity,
        pressure: parsed.main.pressure,
        wind_speed: parsed.wind.speed,
        description: condition.description,
        icon: condition.icon,
        timestamp: Utc::now(),
    })
}

/// Map an upstream non-success status onto the error taxonomy.
fn classify_failure(status: StatusCode, body: &str) -> WeatherError {
    if status == StatusCode::NOT_FOUND {
        return WeatherError::CityNotFound;
    }

    // OpenWeather error bodies look like {"cod": "401", "message": "..."}.
    let message = serde_json::from_str::<UpstreamFailure>(body)
        .ok()
        .and_then(|f| f.message);

    WeatherError::Upstream {
        status: status.as_u16(),
        message,
    }
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    name: String,
    sys: Sys,
    main: Readings,
    wind: Wind,
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct Sys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct Readings {
    temp: f64,
    feels_like: f64,
    humidity: u64,
    pressure: u64,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct UpstreamFailure {
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAYLOAD: &str = r#"{
        "name": "London",
        "sys": { "country": "GB" },
        "main": { "temp": 18.5, "feels_like": 17.9, "humidity": 72, "pressure": 1012 },
        "wind": { "speed": 4.1 },
        "weather": [ { "description": "light rain", "icon": "10d" } ]
    }"#;

    #[test]
    fn full_payload_maps_field_for_field() {
        let summary = summarize(FULL_PAYLOAD).expect("valid payload");

        assert_eq!(summary.city, "London");
        assert_eq!(summary.country, "GB");
        assert_eq!(summary.temperature, 18.5);
        assert_eq!(summary.feels_like, 17.9);
        assert_eq!(summary.humidity, 72);
        assert_eq!(summary.pressure, 1012);
        assert_eq!(summary.wind_speed, 4.1);
        assert_eq!(summary.description, "light rain");
        assert_eq!(summary.icon, "10d");
    }

    #[test]
    fn empty_conditions_array_fails_instead_of_defaulting() {
        let body = r#"{
            "name": "London",
            "sys": { "country": "GB" },
            "main": { "temp": 18.5, "feels_like": 17.9, "humidity": 72, "pressure": 1012 },
            "wind": { "speed": 4.1 },
            "weather": []
        }"#;

        let err = summarize(body).unwrap_err();
        assert!(matches!(err, WeatherError::Internal(_)));
    }

    #[test]
    fn missing_field_fails_the_whole_request() {
        // No "wind" section: must not yield a half-filled summary.
        let body = r#"{
            "name": "London",
            "sys": { "country": "GB" },
            "main": { "temp": 18.5, "feels_like": 17.9, "humidity": 72, "pressure": 1012 },
            "weather": [ { "description": "light rain", "icon": "10d" } ]
        }"#;

        assert!(summarize(body).is_err());
    }

    #[test]
    fn upstream_404_means_city_not_found() {
        let err = classify_failure(StatusCode::NOT_FOUND, r#"{"cod":"404","message":"city not found"}"#);
        assert!(matches!(err, WeatherError::CityNotFound));
    }

    #[test]
    fn other_statuses_keep_the_upstream_message() {
        let err = classify_failure(
            StatusCode::UNAUTHORIZED,
            r#"{"cod":"401","message":"Invalid API key"}"#,
        );
        match err {
            WeatherError::Upstream { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message.as_deref(), Some("Invalid API key"));
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_failure_body_yields_no_message() {
        let err = classify_failure(StatusCode::BAD_GATEWAY, "<html>502</html>");
        match err {
            WeatherError::Upstream { status, message } => {
                assert_eq!(status, 502);
                assert!(message.is_none());
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }
}
