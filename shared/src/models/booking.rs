//! Booking Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Booking lifecycle status
///
/// `confirmed` is the only non-terminal state; `cancelled`, `completed`
/// and `no-show` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Completed,
    #[cfg_attr(feature = "db", sqlx(rename = "no-show"))]
    #[serde(rename = "no-show")]
    NoShow,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
            Self::NoShow => "no-show",
        }
    }

    /// Whether this booking still occupies a seat
    pub fn holds_seat(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

/// Booking entity
///
/// A reservation of one seat in one occurrence (lesson + calendar date)
/// of a lesson. For a given `(user_id, lesson_id, lesson_date)` triple at
/// most one booking with a non-cancelled status may exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Booking {
    pub id: i64,
    pub user_id: String,
    pub lesson_id: i64,
    pub lesson_date: NaiveDate,
    pub status: BookingStatus,
    pub credits_used: i64,
    pub check_in_time: Option<i64>,
    pub check_out_time: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Booking joined with lesson and QR token info (for list views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BookingDetail {
    pub id: i64,
    pub lesson_id: i64,
    pub lesson_name: String,
    pub lesson_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
    pub credits_used: i64,
    pub check_in_time: Option<i64>,
    pub check_out_time: Option<i64>,
    pub created_at: i64,
    pub qr_code: Option<String>,
    pub qr_status: Option<super::QrTokenStatus>,
    pub qr_expires_at: Option<i64>,
}

/// Per-user booking statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BookingStats {
    pub total_bookings: i64,
    pub confirmed_bookings: i64,
    pub cancelled_bookings: i64,
    pub completed_bookings: i64,
    pub attended_lessons: i64,
}
