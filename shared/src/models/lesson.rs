//! Lesson Model

use serde::{Deserialize, Serialize};

/// Lesson entity (recurring class definition, read-only to the booking core)
///
/// `day_of_week` uses 0–6 with Sunday = 0. `start_time`/`end_time` are
/// `HH:MM` strings. Capacity is fixed per definition; the booking core
/// never mutates a lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Lesson {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub capacity: i64,
    pub day_of_week: i64,
    pub start_time: String,
    pub end_time: String,
    pub difficulty: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
}

/// Lesson with its booking count for a specific date (schedule view)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct LessonWithAvailability {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub capacity: i64,
    pub day_of_week: i64,
    pub start_time: String,
    pub end_time: String,
    pub difficulty: Option<String>,
    pub current_bookings: i64,
    pub available_spots: i64,
}
