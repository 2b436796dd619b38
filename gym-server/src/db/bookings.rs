//! Booking queries
//!
//! The capacity invariant is enforced by `insert_confirmed`: the INSERT
//! re-checks both the seat count and the duplicate constraint in its own
//! WHERE clause, so it is atomic with respect to concurrent writers even
//! though the friendly validation happened earlier outside the
//! transaction.

use chrono::NaiveDate;
use shared::models::{Booking, BookingDetail, BookingStats, BookingStatus};
use sqlx::{SqliteConnection, SqlitePool};

const BOOKING_SELECT: &str = "SELECT id, user_id, lesson_id, lesson_date, status, credits_used, \
     check_in_time, check_out_time, created_at, updated_at FROM bookings";

/// Parameters for a guarded booking insert
pub struct NewBooking<'a> {
    pub id: i64,
    pub user_id: &'a str,
    pub lesson_id: i64,
    pub lesson_date: NaiveDate,
    pub credits_used: i64,
    pub capacity: i64,
    pub now: i64,
}

/// Count non-cancelled bookings for one lesson occurrence
pub async fn count_active<'e, E>(
    executor: E,
    lesson_id: i64,
    lesson_date: NaiveDate,
) -> Result<i64, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM bookings \
         WHERE lesson_id = ?1 AND lesson_date = ?2 AND status != 'cancelled'",
    )
    .bind(lesson_id)
    .bind(lesson_date)
    .fetch_one(executor)
    .await
}

/// Existing non-cancelled booking id for a (user, lesson, date) triple
pub async fn find_duplicate_id(
    pool: &SqlitePool,
    user_id: &str,
    lesson_id: i64,
    lesson_date: NaiveDate,
) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT id FROM bookings \
         WHERE user_id = ?1 AND lesson_id = ?2 AND lesson_date = ?3 AND status != 'cancelled' \
         LIMIT 1",
    )
    .bind(user_id)
    .bind(lesson_id)
    .bind(lesson_date)
    .fetch_optional(pool)
    .await
}

/// Insert a confirmed booking, guarded against overbooking and duplicate
/// triples. Returns the number of inserted rows: 0 means one of the two
/// guards failed under concurrency and the caller must re-classify.
pub async fn insert_confirmed(
    conn: &mut SqliteConnection,
    booking: &NewBooking<'_>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO bookings \
             (id, user_id, lesson_id, lesson_date, status, credits_used, created_at, updated_at) \
         SELECT ?1, ?2, ?3, ?4, 'confirmed', ?5, ?6, ?6 \
         WHERE (SELECT COUNT(*) FROM bookings \
                WHERE lesson_id = ?3 AND lesson_date = ?4 AND status != 'cancelled') < ?7 \
           AND NOT EXISTS (SELECT 1 FROM bookings \
                WHERE user_id = ?2 AND lesson_id = ?3 AND lesson_date = ?4 \
                  AND status != 'cancelled')",
    )
    .bind(booking.id)
    .bind(booking.user_id)
    .bind(booking.lesson_id)
    .bind(booking.lesson_date)
    .bind(booking.credits_used)
    .bind(booking.now)
    .bind(booking.capacity)
    .execute(conn)
    .await?;
    Ok(result.rows_affected())
}

pub async fn find_by_id(
    pool: &SqlitePool,
    booking_id: i64,
) -> Result<Option<Booking>, sqlx::Error> {
    let sql = format!("{BOOKING_SELECT} WHERE id = ?1");
    sqlx::query_as::<_, Booking>(&sql)
        .bind(booking_id)
        .fetch_optional(pool)
        .await
}

/// Flip a booking to cancelled. Conditional on the current status so a
/// concurrent cancel affects 0 rows instead of double-refunding.
pub async fn mark_cancelled(
    conn: &mut SqliteConnection,
    booking_id: i64,
    now: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE bookings SET status = 'cancelled', updated_at = ?1 \
         WHERE id = ?2 AND status != 'cancelled'",
    )
    .bind(now)
    .bind(booking_id)
    .execute(conn)
    .await?;
    Ok(result.rows_affected())
}

/// Stamp the check-in time. Conditional on confirmed status and no prior
/// check-in so the stamp can never be written twice.
pub async fn set_check_in(
    conn: &mut SqliteConnection,
    booking_id: i64,
    now: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE bookings SET check_in_time = ?1, updated_at = ?1 \
         WHERE id = ?2 AND status = 'confirmed' AND check_in_time IS NULL",
    )
    .bind(now)
    .bind(booking_id)
    .execute(conn)
    .await?;
    Ok(result.rows_affected())
}

/// A page of the user's bookings joined with lesson and QR token info
pub async fn list_for_user(
    pool: &SqlitePool,
    user_id: &str,
    status: Option<BookingStatus>,
    limit: i64,
    offset: i64,
) -> Result<Vec<BookingDetail>, sqlx::Error> {
    let mut sql = String::from(
        "SELECT b.id, b.lesson_id, l.name AS lesson_name, b.lesson_date, l.start_time, \
                l.end_time, b.status, b.credits_used, b.check_in_time, b.check_out_time, \
                b.created_at, q.code AS qr_code, q.status AS qr_status, \
                q.expires_at AS qr_expires_at \
         FROM bookings b \
         JOIN lessons l ON l.id = b.lesson_id \
         LEFT JOIN qr_tokens q ON q.booking_id = b.id \
         WHERE b.user_id = ?1",
    );
    if status.is_some() {
        sql.push_str(" AND b.status = ?2");
    }
    sql.push_str(" ORDER BY b.lesson_date DESC, l.start_time LIMIT ?3 OFFSET ?4");

    let mut query = sqlx::query_as::<_, BookingDetail>(&sql).bind(user_id);
    query = match status {
        Some(s) => query.bind(s),
        // Placeholder keeps ?3/?4 numbering stable
        None => query.bind(Option::<&str>::None),
    };
    query.bind(limit).bind(offset).fetch_all(pool).await
}

pub async fn count_for_user(
    pool: &SqlitePool,
    user_id: &str,
    status: Option<BookingStatus>,
) -> Result<i64, sqlx::Error> {
    match status {
        Some(s) => {
            sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM bookings WHERE user_id = ?1 AND status = ?2",
            )
            .bind(user_id)
            .bind(s)
            .fetch_one(pool)
            .await
        }
        None => {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings WHERE user_id = ?1")
                .bind(user_id)
                .fetch_one(pool)
                .await
        }
    }
}

/// Per-status counts plus attended lessons in one aggregate pass
pub async fn stats_for_user(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<BookingStats, sqlx::Error> {
    sqlx::query_as::<_, BookingStats>(
        "SELECT COUNT(*) AS total_bookings, \
                COUNT(CASE WHEN status = 'confirmed' THEN 1 END) AS confirmed_bookings, \
                COUNT(CASE WHEN status = 'cancelled' THEN 1 END) AS cancelled_bookings, \
                COUNT(CASE WHEN status = 'completed' THEN 1 END) AS completed_bookings, \
                COUNT(CASE WHEN check_in_time IS NOT NULL THEN 1 END) AS attended_lessons \
         FROM bookings WHERE user_id = ?1",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}
