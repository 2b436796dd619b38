//! Server configuration

use chrono_tz::Tz;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Gym server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file path
    pub database_path: String,
    /// HTTP port
    pub http_port: u16,
    /// JWT secret shared with the identity service
    pub jwt_secret: String,
    /// Business timezone; weekday checks and the cancellation window
    /// are evaluated in it
    pub timezone: Tz,
    /// Environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let timezone = std::env::var("GYM_TIMEZONE")
            .unwrap_or_else(|_| "Europe/Athens".into())
            .parse::<Tz>()
            .map_err(|e| format!("Invalid GYM_TIMEZONE: {e}"))?;

        Ok(Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "gym.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt_secret: Self::require_secret("JWT_SECRET", &environment)?,
            timezone,
            environment,
        })
    }
}
