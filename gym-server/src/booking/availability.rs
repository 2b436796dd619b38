//! Availability checks for lesson occurrences
//!
//! Validation order matches the booking rules: lesson existence, weekday
//! match, future date, then capacity. This pass runs outside the booking
//! transaction for friendly errors; the capacity/duplicate pair is
//! re-checked atomically by the guarded insert.

use chrono::{Datelike, NaiveDate};
use shared::models::Lesson;
use sqlx::SqlitePool;

use super::error::{BookingError, BookingResult};
use crate::db;

/// Result of an availability check
#[derive(Debug, Clone)]
pub struct Availability {
    pub lesson: Lesson,
    pub current_bookings: i64,
    pub available_spots: i64,
}

pub(super) async fn check(
    pool: &SqlitePool,
    lesson_id: i64,
    lesson_date: NaiveDate,
    today: NaiveDate,
) -> BookingResult<Availability> {
    let lesson = db::lessons::find_active(pool, lesson_id)
        .await?
        .ok_or(BookingError::LessonNotFound(lesson_id))?;

    // Sunday = 0, matching the lesson definition
    if i64::from(lesson_date.weekday().num_days_from_sunday()) != lesson.day_of_week {
        return Err(BookingError::WrongDayOfWeek(lesson_id, lesson_date));
    }

    if lesson_date <= today {
        return Err(BookingError::DateNotInFuture(lesson_date));
    }

    let current_bookings = db::bookings::count_active(pool, lesson_id, lesson_date).await?;
    if current_bookings >= lesson.capacity {
        return Err(BookingError::LessonFull(lesson_id, lesson_date));
    }

    Ok(Availability {
        available_spots: lesson.capacity - current_bookings,
        current_bookings,
        lesson,
    })
}
