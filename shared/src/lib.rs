//! Shared types for the gym booking platform
//!
//! Common types used across crates: domain models, the unified
//! error system, and small utilities (timestamps, ID generation).

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
