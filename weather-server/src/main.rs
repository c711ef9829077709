//! Binary entrypoint for the weather lookup service.
//!
//! Boots the axum HTTP server: loads configuration from the environment,
//! wires the OpenWeather provider into shared state, and serves the API.

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use weather_core::{Config, provider};
use weather_server::api;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("weather_server=info,weather_core=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = Config::from_env();
    let provider = provider::provider_from_config(&config);
    if provider.is_none() {
        warn!("OPENWEATHER_API_KEY not set; /api/weather will answer 500 until it is configured");
    }

    let state = api::AppState::new(provider, config.environment.clone());
    let router = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("backend listening on {addr}");
    info!("environment: {}", config.environment);
    info!(
        "health check available at http://localhost:{}/health",
        config.port
    );

    axum::serve(listener, router).await?;

    Ok(())
}
