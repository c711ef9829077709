use std::env;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Runtime configuration, read once at startup and injected everywhere else.
/// Nothing outside this module reads the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port the HTTP server listens on.
    pub port: u16,

    /// OpenWeather credential. Absent means the weather endpoint answers
    /// with a configuration error until it is provided.
    pub api_key: Option<String>,

    /// Environment name, logged at startup ("development", "production", ...).
    pub environment: String,
}

impl Config {
    /// Build configuration from `PORT`, `OPENWEATHER_API_KEY` and `APP_ENV`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`], but with the environment abstracted so
    /// tests don't have to mutate process globals.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_key = lookup("OPENWEATHER_API_KEY").filter(|k| !k.trim().is_empty());

        let environment =
            lookup("APP_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        Self {
            port,
            api_key,
            environment,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
