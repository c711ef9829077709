use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{debug, error, info};
use weather_core::{WeatherError, WeatherProvider, WeatherQuery, WeatherSummary};

/// Shared handler state, built once at startup and injected into the
/// router. Requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// `None` until a provider credential is configured.
    pub provider: Option<Arc<dyn WeatherProvider>>,
    pub started_at: Instant,
    pub environment: String,
}

impl AppState {
    pub fn new(provider: Option<Arc<dyn WeatherProvider>>, environment: String) -> Self {
        Self {
            provider,
            started_at: Instant::now(),
            environment,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/weather", get(weather))
        .fallback(endpoint_not_found)
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
    /// Seconds since startup.
    uptime: f64,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}

#[derive(Deserialize)]
struct WeatherParams {
    city: Option<String>,
}

async fn weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<WeatherSummary>, ApiError> {
    let query = WeatherQuery::parse(params.city.as_deref().unwrap_or_default())?;

    let provider = state.provider.as_ref().ok_or(WeatherError::Misconfigured)?;

    let summary = provider.current_weather(query.city()).await?;
    info!(
        city = %summary.city,
        country = %summary.country,
        temperature = summary.temperature,
        description = %summary.description,
        "served weather summary"
    );

    Ok(Json(summary))
}

async fn endpoint_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
        .into_response()
}

/// Boundary adapter: logs the server-side detail of a [`WeatherError`] and
/// renders the minimal `{"error": ...}` body the client is allowed to see.
pub struct ApiError(WeatherError);

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        match &err {
            WeatherError::InvalidInput | WeatherError::CityNotFound => {
                debug!(%err, "rejected weather lookup");
            }
            WeatherError::Misconfigured => {
                error!("OPENWEATHER_API_KEY not configured");
            }
            WeatherError::Upstream { status, .. } => {
                error!(upstream_status = status, "upstream reported failure");
            }
            WeatherError::Unreachable(source) => {
                error!(error = %source, "failed to reach upstream");
            }
            WeatherError::Internal(source) => {
                error!(error = %source, "error while translating weather response");
            }
        }

        let status = StatusCode::from_u16(err.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(json!({ "error": err.client_message() }))).into_response()
    }
}
