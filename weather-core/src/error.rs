use thiserror::Error;

/// Request-terminal failures of the lookup flow. Nothing here is retried;
/// each variant maps to exactly one HTTP status and client-facing message
/// at the server boundary.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The `city` parameter was missing or empty after trimming.
    #[error("city parameter missing or empty")]
    InvalidInput,

    /// No provider credential is configured.
    #[error("weather provider credential not configured")]
    Misconfigured,

    /// The upstream reported that it knows no such city.
    #[error("city not found upstream")]
    CityNotFound,

    /// The upstream answered with a non-success status other than 404.
    /// `message` carries the upstream body's own message when it had one.
    #[error("upstream returned status {status}")]
    Upstream {
        status: u16,
        message: Option<String>,
    },

    /// No HTTP response from the upstream at all.
    #[error("upstream unreachable")]
    Unreachable(#[source] reqwest::Error),

    /// Anything else, including malformed upstream payloads.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl WeatherError {
    /// HTTP status this error terminates the request with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::CityNotFound => 404,
            Self::Upstream { status, .. } => *status,
            Self::Misconfigured | Self::Unreachable(_) | Self::Internal(_) => 500,
        }
    }

    /// Message safe to show the client. Internal detail stays in the logs.
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidInput => "City parameter is required".into(),
            Self::Misconfigured => "Weather service not configured".into(),
            Self::CityNotFound => "City not found".into(),
            Self::Upstream { message, .. } => message
                .clone()
                .unwrap_or_else(|| "Failed to fetch weather data".into()),
            Self::Unreachable(_) | Self::Internal(_) => "Internal server error".into(),
        }
    }
}
