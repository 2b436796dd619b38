//! QR token queries

use chrono::NaiveDate;
use shared::models::{BookingStatus, QrToken, QrTokenStatus};
use sqlx::{SqliteConnection, SqlitePool};

/// Parameters for issuing a token
pub struct NewQrToken<'a> {
    pub id: i64,
    pub booking_id: i64,
    pub code: &'a str,
    pub expires_at: i64,
    pub now: i64,
}

/// Token joined with its booking and lesson, as needed by check-in
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct QrCheckInRow {
    pub token_id: i64,
    pub token_status: QrTokenStatus,
    pub booking_id: i64,
    pub booking_status: BookingStatus,
    pub lesson_date: NaiveDate,
    pub check_in_time: Option<i64>,
    pub lesson_name: String,
    pub start_time: String,
    pub end_time: String,
}

pub async fn insert(
    conn: &mut SqliteConnection,
    token: &NewQrToken<'_>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO qr_tokens (id, booking_id, code, status, expires_at, created_at, updated_at) \
         VALUES (?1, ?2, ?3, 'active', ?4, ?5, ?5)",
    )
    .bind(token.id)
    .bind(token.booking_id)
    .bind(token.code)
    .bind(token.expires_at)
    .bind(token.now)
    .execute(conn)
    .await?;
    Ok(())
}

pub async fn find_for_check_in(
    pool: &SqlitePool,
    code: &str,
) -> Result<Option<QrCheckInRow>, sqlx::Error> {
    sqlx::query_as::<_, QrCheckInRow>(
        "SELECT q.id AS token_id, q.status AS token_status, \
                b.id AS booking_id, b.status AS booking_status, b.lesson_date, b.check_in_time, \
                l.name AS lesson_name, l.start_time, l.end_time \
         FROM qr_tokens q \
         JOIN bookings b ON b.id = q.booking_id \
         JOIN lessons l ON l.id = b.lesson_id \
         WHERE q.code = ?1",
    )
    .bind(code)
    .fetch_optional(pool)
    .await
}

/// Consume the token. Conditional on active status: affects 0 rows when
/// the token was already used or expired, which makes single-use safe
/// under concurrent check-in attempts.
pub async fn mark_used(
    conn: &mut SqliteConnection,
    token_id: i64,
    now: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE qr_tokens SET status = 'used', used_at = ?1, updated_at = ?1 \
         WHERE id = ?2 AND status = 'active'",
    )
    .bind(now)
    .bind(token_id)
    .execute(conn)
    .await?;
    Ok(result.rows_affected())
}

/// Expire the token bound to a cancelled booking
pub async fn expire_for_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
    now: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE qr_tokens SET status = 'expired', updated_at = ?1 \
         WHERE booking_id = ?2 AND status = 'active'",
    )
    .bind(now)
    .bind(booking_id)
    .execute(conn)
    .await?;
    Ok(result.rows_affected())
}

pub async fn find_by_booking(
    pool: &SqlitePool,
    booking_id: i64,
) -> Result<Option<QrToken>, sqlx::Error> {
    sqlx::query_as::<_, QrToken>(
        "SELECT id, booking_id, code, status, expires_at, used_at, created_at, updated_at \
         FROM qr_tokens WHERE booking_id = ?1",
    )
    .bind(booking_id)
    .fetch_optional(pool)
    .await
}
