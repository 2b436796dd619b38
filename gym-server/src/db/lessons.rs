//! Lesson queries (read-only; the booking core never mutates lessons)

use chrono::NaiveDate;
use shared::models::{Lesson, LessonWithAvailability};
use sqlx::SqlitePool;

const LESSON_SELECT: &str = "SELECT id, name, description, capacity, day_of_week, start_time, \
     end_time, difficulty, is_active, created_at FROM lessons";

pub async fn find_active(
    pool: &SqlitePool,
    lesson_id: i64,
) -> Result<Option<Lesson>, sqlx::Error> {
    let sql = format!("{LESSON_SELECT} WHERE id = ?1 AND is_active = 1");
    sqlx::query_as::<_, Lesson>(&sql)
        .bind(lesson_id)
        .fetch_optional(pool)
        .await
}

pub async fn find_all_active(pool: &SqlitePool) -> Result<Vec<Lesson>, sqlx::Error> {
    let sql = format!("{LESSON_SELECT} WHERE is_active = 1 ORDER BY day_of_week, start_time");
    sqlx::query_as::<_, Lesson>(&sql).fetch_all(pool).await
}

/// Active lessons running on `day_of_week`, each with its non-cancelled
/// booking count for `lesson_date` (schedule view)
pub async fn find_by_day_with_counts(
    pool: &SqlitePool,
    day_of_week: i64,
    lesson_date: NaiveDate,
) -> Result<Vec<LessonWithAvailability>, sqlx::Error> {
    sqlx::query_as::<_, LessonWithAvailability>(
        "SELECT l.id, l.name, l.description, l.capacity, l.day_of_week, l.start_time, \
                l.end_time, l.difficulty, \
                (SELECT COUNT(*) FROM bookings b \
                 WHERE b.lesson_id = l.id AND b.lesson_date = ?2 AND b.status != 'cancelled') \
                    AS current_bookings, \
                l.capacity - (SELECT COUNT(*) FROM bookings b \
                 WHERE b.lesson_id = l.id AND b.lesson_date = ?2 AND b.status != 'cancelled') \
                    AS available_spots \
         FROM lessons l \
         WHERE l.is_active = 1 AND l.day_of_week = ?1 \
         ORDER BY l.start_time",
    )
    .bind(day_of_week)
    .bind(lesson_date)
    .fetch_all(pool)
    .await
}
