use crate::{Config, WeatherError, WeatherSummary};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Abstraction over the upstream current-conditions service. The server is
/// written against this trait so tests can script the upstream.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<WeatherSummary, WeatherError>;
}

/// Construct the provider from config. `None` when no credential is set;
/// the caller decides how to surface that (the server answers 500 per
/// request, as the original did).
pub fn provider_from_config(config: &Config) -> Option<Arc<dyn WeatherProvider>> {
    config
        .api_key
        .as_deref()
        .map(|key| Arc::new(OpenWeatherProvider::new(key.to_owned())) as Arc<dyn WeatherProvider>)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_provider_without_a_credential() {
        let cfg = Config::from_lookup(|_| None);
        assert!(provider_from_config(&cfg).is_none());
    }

    #[test]
    fn provider_exists_once_a_credential_is_set() {
        let cfg = Config::from_lookup(|key| {
            (key == "OPENWEATHER_API_KEY").then(|| "KEY".to_string())
        });
        assert!(provider_from_config(&cfg).is_some());
    }
}
