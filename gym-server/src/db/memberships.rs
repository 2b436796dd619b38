//! Membership queries
//!
//! The credit balance is the one hot shared counter in the system, so
//! every mutation here is a single conditional UPDATE. Application-level
//! read-modify-write of `credits_remaining` is forbidden.

use chrono::NaiveDate;
use shared::models::{Membership, MembershipPackage, MembershipWithPackage};
use sqlx::{SqliteConnection, SqlitePool};

const MEMBERSHIP_SELECT: &str = "SELECT id, user_id, package_id, status, credits_remaining, \
     credits_total, start_date, end_date, created_at, updated_at FROM memberships";

/// Find the user's active membership that is still valid on `today`.
///
/// If more than one is somehow active, the most-recently-expiring wins
/// (defensive tie-break).
pub async fn find_active(
    pool: &SqlitePool,
    user_id: &str,
    today: NaiveDate,
) -> Result<Option<Membership>, sqlx::Error> {
    let sql = format!(
        "{MEMBERSHIP_SELECT} WHERE user_id = ?1 AND status = 'active' AND end_date >= ?2 \
         ORDER BY end_date DESC LIMIT 1"
    );
    sqlx::query_as::<_, Membership>(&sql)
        .bind(user_id)
        .bind(today)
        .fetch_optional(pool)
        .await
}

/// Atomically debit credits. Affects 0 rows when the balance is too low,
/// so concurrent reservations can never drive it negative.
pub async fn reserve_credits(
    conn: &mut SqliteConnection,
    membership_id: i64,
    amount: i64,
    now: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE memberships SET credits_remaining = credits_remaining - ?1, updated_at = ?2 \
         WHERE id = ?3 AND credits_remaining >= ?1",
    )
    .bind(amount)
    .bind(now)
    .bind(membership_id)
    .execute(conn)
    .await?;
    Ok(result.rows_affected())
}

/// Credit a refund to the user's currently active membership,
/// most-recently-expiring first. Affects 0 rows when none is active.
pub async fn refund_credits(
    conn: &mut SqliteConnection,
    user_id: &str,
    amount: i64,
    now: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE memberships SET credits_remaining = credits_remaining + ?1, updated_at = ?2 \
         WHERE id = (SELECT id FROM memberships WHERE user_id = ?3 AND status = 'active' \
                     ORDER BY end_date DESC LIMIT 1)",
    )
    .bind(amount)
    .bind(now)
    .bind(user_id)
    .execute(conn)
    .await?;
    Ok(result.rows_affected())
}

/// The user's active membership joined with its package (profile view)
pub async fn find_active_with_package(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Option<MembershipWithPackage>, sqlx::Error> {
    sqlx::query_as::<_, MembershipWithPackage>(
        "SELECT m.id, m.user_id, m.status, m.credits_remaining, m.credits_total, \
                m.start_date, m.end_date, m.created_at, \
                p.id AS package_id, p.name AS package_name, \
                p.description AS package_description, p.price AS package_price, \
                p.credits AS package_credits, p.validity_days AS package_validity_days \
         FROM memberships m \
         JOIN membership_packages p ON p.id = m.package_id \
         WHERE m.user_id = ?1 AND m.status = 'active' \
         ORDER BY m.end_date DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// All purchasable packages, cheapest first
pub async fn list_active_packages(
    pool: &SqlitePool,
) -> Result<Vec<MembershipPackage>, sqlx::Error> {
    sqlx::query_as::<_, MembershipPackage>(
        "SELECT id, name, description, price, credits, validity_days, is_active, created_at \
         FROM membership_packages WHERE is_active = 1 ORDER BY price ASC",
    )
    .fetch_all(pool)
    .await
}
