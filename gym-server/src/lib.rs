//! Gym booking server
//!
//! Long-running service backing the member-facing booking app:
//!
//! - **Booking core** (`booking`): availability, credit ledger, booking
//!   lifecycle and QR check-in, composed into atomic operations
//! - **Database** (`db`): SQLite storage port (pool, migrations, queries)
//! - **Authentication** (`auth`): JWT verification middleware
//! - **HTTP API** (`api`): axum routes and handlers
//!
//! # Module structure
//!
//! ```text
//! gym-server/src/
//! ├── config.rs      # Environment configuration
//! ├── state.rs       # Shared application state
//! ├── error.rs       # Service-layer error bridge
//! ├── auth/          # JWT verification, identity extraction
//! ├── db/            # SQLite pool + per-table query modules
//! ├── booking/       # Booking/credit/QR core engine
//! └── api/           # HTTP routes and handlers
//! ```

pub mod api;
pub mod auth;
pub mod booking;
pub mod config;
pub mod db;
pub mod error;
pub mod state;

// Re-export public types
pub use booking::{BookingEngine, BookingError};
pub use db::DbService;
pub use state::AppState;
