//! Credit ledger operations
//!
//! Credits live on the membership row. Both directions go through single
//! conditional UPDATEs (see `db::memberships`), so the balance can never
//! go negative regardless of interleaving.

use chrono::NaiveDate;
use shared::models::Membership;
use sqlx::{SqliteConnection, SqlitePool};

use super::error::{BookingError, BookingResult};
use crate::db;

/// Validate that the user can pay for a reservation and return the
/// membership that will be debited.
pub(super) async fn membership_for_reservation(
    pool: &SqlitePool,
    user_id: &str,
    today: NaiveDate,
    amount: i64,
) -> BookingResult<Membership> {
    let membership = db::memberships::find_active(pool, user_id, today)
        .await?
        .ok_or(BookingError::NoActiveMembership)?;

    if membership.credits_remaining < amount {
        return Err(BookingError::InsufficientCredits);
    }

    Ok(membership)
}

/// Debit the membership inside the booking transaction. Zero affected
/// rows means a concurrent reservation emptied the balance first.
pub(super) async fn reserve(
    conn: &mut SqliteConnection,
    membership_id: i64,
    amount: i64,
    now: i64,
) -> BookingResult<()> {
    let rows = db::memberships::reserve_credits(conn, membership_id, amount, now).await?;
    if rows == 0 {
        return Err(BookingError::InsufficientCredits);
    }
    Ok(())
}

/// Refund onto the user's currently active membership, not necessarily
/// the one originally debited (observed upstream behavior, kept as-is).
/// With no active membership the refund is skipped and the cancellation
/// still goes through.
pub(super) async fn refund(
    conn: &mut SqliteConnection,
    user_id: &str,
    amount: i64,
    now: i64,
) -> BookingResult<()> {
    let rows = db::memberships::refund_credits(conn, user_id, amount, now).await?;
    if rows == 0 {
        tracing::warn!(user_id, amount, "credit refund skipped: no active membership");
    }
    Ok(())
}
