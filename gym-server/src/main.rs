//! gym-server — booking backend for the gym platform
//!
//! Long-running service that:
//! - Enforces the booking/credit/QR core rules (capacity, cancellation
//!   window, single-use check-in)
//! - Serves the member-facing booking API (JWT authenticated)
//! - Serves the read-side schedule and membership views

use gym_server::api;
use gym_server::config::Config;
use gym_server::state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gym_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!(
        "Starting gym-server (env: {}, tz: {})",
        config.environment,
        config.timezone
    );

    // Initialize application state (opens the database, runs migrations)
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("gym-server HTTP listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
