use super::*;
use crate::db::DbService;
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use shared::util::{now_millis, snowflake_id};

mod test_create;

const TZ: Tz = chrono_tz::UTC;

async fn test_engine() -> (BookingEngine, DbService) {
    let db = DbService::open_in_memory().await.unwrap();
    (BookingEngine::new(db.clone(), TZ), db)
}

fn today() -> NaiveDate {
    // Engine runs on UTC in tests, so "today" is the UTC date
    Utc::now().date_naive()
}

fn date_in(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

fn weekday_of(date: NaiveDate) -> i64 {
    i64::from(date.weekday().num_days_from_sunday())
}

fn midnight_after(date: NaiveDate) -> i64 {
    (date + Duration::days(1))
        .and_time(NaiveTime::MIN)
        .and_utc()
        .timestamp_millis()
}

// ========================================================================
// Seeding helpers
// ========================================================================

async fn seed_lesson(db: &DbService, capacity: i64, day_of_week: i64) -> i64 {
    let id = snowflake_id();
    sqlx::query(
        "INSERT INTO lessons \
             (id, name, description, capacity, day_of_week, start_time, end_time, \
              difficulty, is_active, created_at) \
         VALUES (?1, 'Pilates', NULL, ?2, ?3, '09:00', '10:00', 'beginner', 1, ?4)",
    )
    .bind(id)
    .bind(capacity)
    .bind(day_of_week)
    .bind(now_millis())
    .execute(&db.pool)
    .await
    .unwrap();
    id
}

async fn deactivate_lesson(db: &DbService, lesson_id: i64) {
    sqlx::query("UPDATE lessons SET is_active = 0 WHERE id = ?1")
        .bind(lesson_id)
        .execute(&db.pool)
        .await
        .unwrap();
}

async fn seed_package(db: &DbService) -> i64 {
    let id = snowflake_id();
    sqlx::query(
        "INSERT INTO membership_packages \
             (id, name, description, price, credits, validity_days, is_active, created_at) \
         VALUES (?1, 'Standard 2x', NULL, 60.0, 8, 30, 1, ?2)",
    )
    .bind(id)
    .bind(now_millis())
    .execute(&db.pool)
    .await
    .unwrap();
    id
}

async fn seed_membership_dates(
    db: &DbService,
    user_id: &str,
    credits: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> i64 {
    let package_id = seed_package(db).await;
    let id = snowflake_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO memberships \
             (id, user_id, package_id, status, credits_remaining, credits_total, \
              start_date, end_date, created_at, updated_at) \
         VALUES (?1, ?2, ?3, 'active', ?4, 20, ?5, ?6, ?7, ?7)",
    )
    .bind(id)
    .bind(user_id)
    .bind(package_id)
    .bind(credits)
    .bind(start_date)
    .bind(end_date)
    .bind(now)
    .execute(&db.pool)
    .await
    .unwrap();
    id
}

async fn seed_membership(db: &DbService, user_id: &str, credits: i64) -> i64 {
    seed_membership_dates(
        db,
        user_id,
        credits,
        today() - Duration::days(30),
        today() + Duration::days(30),
    )
    .await
}

async fn set_membership_status(db: &DbService, membership_id: i64, status: &str) {
    sqlx::query("UPDATE memberships SET status = ?1 WHERE id = ?2")
        .bind(status)
        .bind(membership_id)
        .execute(&db.pool)
        .await
        .unwrap();
}

/// Insert a booking plus its active QR token directly, bypassing the
/// engine: check-in tests need bookings dated today, which the create
/// path rightly refuses.
async fn seed_booking(
    db: &DbService,
    user_id: &str,
    lesson_id: i64,
    lesson_date: NaiveDate,
    status: &str,
) -> (i64, String) {
    let booking_id = snowflake_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO bookings \
             (id, user_id, lesson_id, lesson_date, status, credits_used, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6, ?6)",
    )
    .bind(booking_id)
    .bind(user_id)
    .bind(lesson_id)
    .bind(lesson_date)
    .bind(status)
    .bind(now)
    .execute(&db.pool)
    .await
    .unwrap();

    let code = qr::generate_code();
    sqlx::query(
        "INSERT INTO qr_tokens (id, booking_id, code, status, expires_at, created_at, updated_at) \
         VALUES (?1, ?2, ?3, 'active', ?4, ?5, ?5)",
    )
    .bind(snowflake_id())
    .bind(booking_id)
    .bind(&code)
    .bind(midnight_after(lesson_date))
    .bind(now)
    .execute(&db.pool)
    .await
    .unwrap();

    (booking_id, code)
}

// ========================================================================
// State probes
// ========================================================================

async fn membership_credits(db: &DbService, membership_id: i64) -> i64 {
    sqlx::query_scalar("SELECT credits_remaining FROM memberships WHERE id = ?1")
        .bind(membership_id)
        .fetch_one(&db.pool)
        .await
        .unwrap()
}

async fn booking_status_of(db: &DbService, booking_id: i64) -> String {
    sqlx::query_scalar("SELECT status FROM bookings WHERE id = ?1")
        .bind(booking_id)
        .fetch_one(&db.pool)
        .await
        .unwrap()
}

async fn token_status_of(db: &DbService, booking_id: i64) -> String {
    sqlx::query_scalar("SELECT status FROM qr_tokens WHERE booking_id = ?1")
        .bind(booking_id)
        .fetch_one(&db.pool)
        .await
        .unwrap()
}

async fn check_in_time_of(db: &DbService, booking_id: i64) -> Option<i64> {
    sqlx::query_scalar("SELECT check_in_time FROM bookings WHERE id = ?1")
        .bind(booking_id)
        .fetch_one(&db.pool)
        .await
        .unwrap()
}

async fn active_count(db: &DbService, lesson_id: i64, lesson_date: NaiveDate) -> i64 {
    crate::db::bookings::count_active(&db.pool, lesson_id, lesson_date)
        .await
        .unwrap()
}

async fn total_bookings(db: &DbService) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
        .fetch_one(&db.pool)
        .await
        .unwrap()
}
