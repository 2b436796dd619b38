//! QR check-in
//!
//! Consumes a single-use token and stamps the booking's check-in time in
//! one transaction. Both UPDATEs are conditional, so even two check-in
//! requests racing on the same code produce exactly one stamp.

use chrono::NaiveDate;
use shared::models::{BookingStatus, QrTokenStatus};
use shared::util::now_millis;

use super::error::{BookingError, BookingResult};
use crate::db::{self, DbService};

/// What the front desk sees after a successful scan
#[derive(Debug, Clone)]
pub struct CheckInReceipt {
    pub lesson_name: String,
    pub start_time: String,
    pub end_time: String,
    pub check_in_time: i64,
}

pub(super) async fn check_in(
    db: &DbService,
    today: NaiveDate,
    code: &str,
) -> BookingResult<CheckInReceipt> {
    let row = db::qr_tokens::find_for_check_in(&db.pool, code)
        .await?
        .ok_or(BookingError::InvalidQrCode)?;

    if row.token_status != QrTokenStatus::Active {
        return Err(BookingError::QrNotActive);
    }
    if row.booking_status != BookingStatus::Confirmed {
        return Err(BookingError::BookingNotConfirmed);
    }
    if today != row.lesson_date {
        return Err(BookingError::WrongDay);
    }
    if row.check_in_time.is_some() {
        return Err(BookingError::AlreadyCheckedIn);
    }

    let now = now_millis();
    let mut tx = db.pool.begin().await?;

    let stamped = db::bookings::set_check_in(&mut *tx, row.booking_id, now).await?;
    if stamped == 0 {
        // Lost a race with another scan; dropping tx rolls back
        return Err(BookingError::AlreadyCheckedIn);
    }

    let consumed = db::qr_tokens::mark_used(&mut *tx, row.token_id, now).await?;
    if consumed == 0 {
        return Err(BookingError::QrNotActive);
    }

    tx.commit().await?;

    tracing::info!(booking_id = row.booking_id, "check-in completed");

    Ok(CheckInReceipt {
        lesson_name: row.lesson_name,
        start_time: row.start_time,
        end_time: row.end_time,
        check_in_time: now,
    })
}
