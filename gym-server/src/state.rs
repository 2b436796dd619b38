//! Application state

use shared::error::AppError;

use crate::booking::BookingEngine;
use crate::config::Config;
use crate::db::DbService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite database service
    pub db: DbService,
    /// Booking core engine
    pub engine: BookingEngine,
    /// JWT secret for user authentication
    pub jwt_secret: String,
}

impl AppState {
    /// Create a new AppState
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let db = DbService::open(&config.database_path).await?;
        let engine = BookingEngine::new(db.clone(), config.timezone);
        Ok(Self {
            db,
            engine,
            jwt_secret: config.jwt_secret.clone(),
        })
    }
}
