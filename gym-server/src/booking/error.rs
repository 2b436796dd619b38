use chrono::NaiveDate;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Booking core errors
///
/// Every variant except `Storage` is a validation failure raised before
/// (or instead of) any state mutation; `Storage` wraps infrastructure
/// failures after the in-flight transaction has been rolled back.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Lesson not found or inactive: {0}")]
    LessonNotFound(i64),

    #[error("Lesson {0} does not run on {1}")]
    WrongDayOfWeek(i64, NaiveDate),

    #[error("Lesson date {0} is not in the future")]
    DateNotInFuture(NaiveDate),

    #[error("Lesson {0} is full on {1}")]
    LessonFull(i64, NaiveDate),

    #[error("No active membership with available credits")]
    NoActiveMembership,

    #[error("Not enough credits for this booking")]
    InsufficientCredits,

    #[error("Lesson {0} already booked for this date")]
    DuplicateBooking(i64),

    #[error("Booking not found: {0}")]
    BookingNotFound(i64),

    #[error("Booking {0} belongs to another user")]
    Forbidden(i64),

    #[error("Booking {0} has already been cancelled")]
    AlreadyCancelled(i64),

    #[error("Bookings cannot be cancelled less than 48 hours before the lesson")]
    CancellationWindowClosed,

    #[error("QR code is not valid")]
    InvalidQrCode,

    #[error("QR code is not active")]
    QrNotActive,

    #[error("Booking is not confirmed")]
    BookingNotConfirmed,

    #[error("QR code is only valid on the lesson day")]
    WrongDay,

    #[error("Already checked in for this lesson")]
    AlreadyCheckedIn,

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type BookingResult<T> = Result<T, BookingError>;

impl BookingError {
    /// Map to the platform-wide error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::LessonNotFound(_) => ErrorCode::LessonNotFound,
            Self::WrongDayOfWeek(_, _) => ErrorCode::LessonWrongDay,
            Self::DateNotInFuture(_) => ErrorCode::LessonDateNotFuture,
            Self::LessonFull(_, _) => ErrorCode::LessonFull,
            Self::NoActiveMembership => ErrorCode::NoActiveMembership,
            Self::InsufficientCredits => ErrorCode::InsufficientCredits,
            Self::DuplicateBooking(_) => ErrorCode::DuplicateBooking,
            Self::BookingNotFound(_) => ErrorCode::BookingNotFound,
            Self::Forbidden(_) => ErrorCode::NotBookingOwner,
            Self::AlreadyCancelled(_) => ErrorCode::BookingAlreadyCancelled,
            Self::CancellationWindowClosed => ErrorCode::CancellationWindowClosed,
            Self::InvalidQrCode => ErrorCode::QrCodeInvalid,
            Self::QrNotActive => ErrorCode::QrCodeNotActive,
            Self::BookingNotConfirmed => ErrorCode::BookingNotConfirmed,
            Self::WrongDay => ErrorCode::CheckInWrongDay,
            Self::AlreadyCheckedIn => ErrorCode::AlreadyCheckedIn,
            Self::Storage(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match &err {
            BookingError::Storage(e) => {
                // Technical detail stays in the log, the client gets a
                // generic code after the transaction has rolled back.
                tracing::error!(error = %e, "Booking storage error");
                AppError::new(ErrorCode::DatabaseError)
            }
            _ => AppError::with_message(err.code(), err.to_string()),
        }
    }
}
