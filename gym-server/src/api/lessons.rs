//! Lesson schedule endpoints (read-only)

use axum::extract::{Path, State};
use chrono::{Datelike, NaiveDate};
use shared::error::ApiResponse;
use shared::models::{Lesson, LessonWithAvailability};

use super::ApiResult;
use crate::db;
use crate::state::AppState;

/// GET /api/lessons - the weekly schedule
pub async fn list_lessons(State(state): State<AppState>) -> ApiResult<Vec<Lesson>> {
    let lessons = db::lessons::find_all_active(&state.db.pool).await?;
    Ok(ApiResponse::success(lessons))
}

/// GET /api/lessons/date/{date} - lessons running on a calendar date,
/// with remaining spots
pub async fn lessons_by_date(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> ApiResult<Vec<LessonWithAvailability>> {
    let day_of_week = i64::from(date.weekday().num_days_from_sunday());
    let lessons = db::lessons::find_by_day_with_counts(&state.db.pool, day_of_week, date).await?;
    Ok(ApiResponse::success(lessons))
}
