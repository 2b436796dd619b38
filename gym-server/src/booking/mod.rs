//! Booking core engine
//!
//! Composes the availability checker, the credit ledger, the booking
//! lifecycle and the QR token subsystem into the three atomic operations
//! the API exposes: create, cancel and check-in.
//!
//! # Transaction discipline
//!
//! Friendly validation runs first against the pool; every multi-step
//! mutation then happens inside one SQLite transaction whose first
//! statement is a write, and whose decisive statements are conditional
//! (`UPDATE ... WHERE`, guarded `INSERT ... SELECT ... WHERE`). A
//! transaction dropped before `commit()` rolls back, so no partial
//! effect (seat without debit, debit without token) is ever visible.

mod availability;
mod checkin;
mod credits;
mod error;
mod qr;

#[cfg(test)]
mod tests;

pub use availability::Availability;
pub use checkin::CheckInReceipt;
pub use error::{BookingError, BookingResult};

use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use shared::models::{Booking, BookingStats, BookingStatus};
use shared::util::{now_millis, snowflake_id};

use crate::db::{self, DbService};

/// Cancellations closer to the lesson than this forfeit the refund
pub const CANCELLATION_CUTOFF_HOURS: i64 = 48;

/// Credits one booking consumes
const CREDITS_PER_BOOKING: i64 = 1;

/// Result of a successful booking creation
#[derive(Debug, Clone)]
pub struct CreatedBooking {
    pub booking: Booking,
    pub qr_code: String,
    pub remaining_credits: i64,
}

/// The booking engine. Cheap to clone; all state lives in the database.
#[derive(Clone)]
pub struct BookingEngine {
    db: DbService,
    /// Business timezone: "today" and the cancellation window are
    /// computed in it, not in UTC
    tz: Tz,
}

impl BookingEngine {
    pub fn new(db: DbService, tz: Tz) -> Self {
        Self { db, tz }
    }

    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }

    /// Epoch millis of midnight starting `date` in the business timezone
    fn midnight_millis(&self, date: NaiveDate) -> i64 {
        let naive = date.and_time(NaiveTime::MIN);
        match naive.and_local_timezone(self.tz) {
            chrono::LocalResult::Single(dt) => dt.timestamp_millis(),
            chrono::LocalResult::Ambiguous(dt, _) => dt.timestamp_millis(),
            chrono::LocalResult::None => naive.and_utc().timestamp_millis(),
        }
    }

    /// Token validity ends 24h after midnight of the lesson date
    fn token_expiry(&self, lesson_date: NaiveDate) -> i64 {
        self.midnight_millis(lesson_date) + Duration::hours(24).num_milliseconds()
    }

    /// Minutes from now until midnight of the lesson date (negative once
    /// the day has started)
    fn minutes_until(&self, lesson_date: NaiveDate) -> i64 {
        let lesson_start = self.midnight_millis(lesson_date);
        (lesson_start - now_millis()) / 60_000
    }

    /// Availability for one lesson occurrence (§ booking rules 1–5)
    pub async fn check_availability(
        &self,
        lesson_id: i64,
        lesson_date: NaiveDate,
    ) -> BookingResult<Availability> {
        availability::check(&self.db.pool, lesson_id, lesson_date, self.today()).await
    }

    /// Reserve a seat: validate, debit one credit, insert the booking and
    /// issue its QR token, all inside one transaction.
    pub async fn create_booking(
        &self,
        user_id: &str,
        lesson_id: i64,
        lesson_date: NaiveDate,
    ) -> BookingResult<CreatedBooking> {
        let today = self.today();

        let availability =
            availability::check(&self.db.pool, lesson_id, lesson_date, today).await?;

        let membership = credits::membership_for_reservation(
            &self.db.pool,
            user_id,
            today,
            CREDITS_PER_BOOKING,
        )
        .await?;

        if db::bookings::find_duplicate_id(&self.db.pool, user_id, lesson_id, lesson_date)
            .await?
            .is_some()
        {
            return Err(BookingError::DuplicateBooking(lesson_id));
        }

        let now = now_millis();
        let booking_id = snowflake_id();
        let code = qr::generate_code();

        let mut tx = self.db.pool.begin().await?;

        // The debit comes first: it is a write, so the transaction takes
        // the write lock up front and the guarded insert below sees a
        // settled seat count.
        credits::reserve(&mut *tx, membership.id, CREDITS_PER_BOOKING, now).await?;

        let inserted = db::bookings::insert_confirmed(
            &mut *tx,
            &db::bookings::NewBooking {
                id: booking_id,
                user_id,
                lesson_id,
                lesson_date,
                credits_used: CREDITS_PER_BOOKING,
                capacity: availability.lesson.capacity,
                now,
            },
        )
        .await?;

        if inserted == 0 {
            // A concurrent request won the seat or the triple; classify
            // while still holding the transaction, then roll back.
            let count = db::bookings::count_active(&mut *tx, lesson_id, lesson_date).await?;
            return Err(if count >= availability.lesson.capacity {
                BookingError::LessonFull(lesson_id, lesson_date)
            } else {
                BookingError::DuplicateBooking(lesson_id)
            });
        }

        db::qr_tokens::insert(
            &mut *tx,
            &db::qr_tokens::NewQrToken {
                id: snowflake_id(),
                booking_id,
                code: &code,
                expires_at: self.token_expiry(lesson_date),
                now,
            },
        )
        .await?;

        tx.commit().await?;

        tracing::info!(user_id, lesson_id, booking_id, %lesson_date, "booking created");

        Ok(CreatedBooking {
            booking: Booking {
                id: booking_id,
                user_id: user_id.to_string(),
                lesson_id,
                lesson_date,
                status: BookingStatus::Confirmed,
                credits_used: CREDITS_PER_BOOKING,
                check_in_time: None,
                check_out_time: None,
                created_at: now,
                updated_at: now,
            },
            qr_code: code,
            remaining_credits: membership.credits_remaining - CREDITS_PER_BOOKING,
        })
    }

    /// Cancel a booking, refunding its credits when the 48h window is
    /// still open. Ownership is enforced; admins go through a separate
    /// maintenance path, not this one.
    pub async fn cancel_booking(&self, booking_id: i64, user_id: &str) -> BookingResult<()> {
        let booking = db::bookings::find_by_id(&self.db.pool, booking_id)
            .await?
            .ok_or(BookingError::BookingNotFound(booking_id))?;

        if booking.user_id != user_id {
            return Err(BookingError::Forbidden(booking_id));
        }
        if booking.status == BookingStatus::Cancelled {
            return Err(BookingError::AlreadyCancelled(booking_id));
        }
        if self.minutes_until(booking.lesson_date) < CANCELLATION_CUTOFF_HOURS * 60 {
            return Err(BookingError::CancellationWindowClosed);
        }

        let now = now_millis();
        let mut tx = self.db.pool.begin().await?;

        let cancelled = db::bookings::mark_cancelled(&mut *tx, booking_id, now).await?;
        if cancelled == 0 {
            // Someone else cancelled between the read and the write
            return Err(BookingError::AlreadyCancelled(booking_id));
        }

        credits::refund(&mut *tx, user_id, booking.credits_used, now).await?;
        db::qr_tokens::expire_for_booking(&mut *tx, booking_id, now).await?;

        tx.commit().await?;

        tracing::info!(user_id, booking_id, "booking cancelled");
        Ok(())
    }

    /// Consume a QR token and stamp the booking's check-in time
    pub async fn check_in(&self, code: &str) -> BookingResult<CheckInReceipt> {
        checkin::check_in(&self.db, self.today(), code).await
    }

    /// Per-user booking statistics
    pub async fn booking_stats(&self, user_id: &str) -> BookingResult<BookingStats> {
        Ok(db::bookings::stats_for_user(&self.db.pool, user_id).await?)
    }
}
