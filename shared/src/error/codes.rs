//! Unified error codes for the gym booking platform
//!
//! This module defines all error codes used across the server and frontend.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Membership errors
//! - 4xxx: Booking errors
//! - 5xxx: Check-in errors
//! - 6xxx: Lesson errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is disabled
    AccountDisabled = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 3xxx: Membership ====================
    /// No active membership with remaining validity
    NoActiveMembership = 3001,
    /// Not enough credits remaining on the membership
    InsufficientCredits = 3002,
    /// Membership not found
    MembershipNotFound = 3003,
    /// Membership package not found
    PackageNotFound = 3004,

    // ==================== 4xxx: Booking ====================
    /// Booking not found
    BookingNotFound = 4001,
    /// A non-cancelled booking already exists for this lesson and date
    DuplicateBooking = 4002,
    /// Booking has already been cancelled
    BookingAlreadyCancelled = 4003,
    /// Cancellation window (48h before the lesson) has closed
    CancellationWindowClosed = 4004,
    /// Booking belongs to another user
    NotBookingOwner = 4005,
    /// Booking is not in confirmed state
    BookingNotConfirmed = 4006,

    // ==================== 5xxx: Check-in ====================
    /// QR code does not exist
    QrCodeInvalid = 5001,
    /// QR code is not active (already used or expired)
    QrCodeNotActive = 5002,
    /// Check-in attempted on a day other than the lesson date
    CheckInWrongDay = 5003,
    /// Booking already has a check-in
    AlreadyCheckedIn = 5004,

    // ==================== 6xxx: Lesson ====================
    /// Lesson not found or inactive
    LessonNotFound = 6001,
    /// Lesson has no free spots for this date
    LessonFull = 6002,
    /// Requested date does not fall on the lesson's weekday
    LessonWrongDay = 6003,
    /// Requested date is today or in the past
    LessonDateNotFuture = 6004,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::AccountDisabled => "Account is disabled",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Specific role is required",
            ErrorCode::AdminRequired => "Administrator role is required",

            // Membership
            ErrorCode::NoActiveMembership => "No active membership with available credits",
            ErrorCode::InsufficientCredits => "Not enough credits for this booking",
            ErrorCode::MembershipNotFound => "Membership not found",
            ErrorCode::PackageNotFound => "Membership package not found",

            // Booking
            ErrorCode::BookingNotFound => "Booking not found",
            ErrorCode::DuplicateBooking => "Lesson already booked for this date",
            ErrorCode::BookingAlreadyCancelled => "Booking has already been cancelled",
            ErrorCode::CancellationWindowClosed => {
                "Bookings cannot be cancelled less than 48 hours before the lesson"
            }
            ErrorCode::NotBookingOwner => "Booking belongs to another user",
            ErrorCode::BookingNotConfirmed => "Booking is not confirmed",

            // Check-in
            ErrorCode::QrCodeInvalid => "QR code is not valid",
            ErrorCode::QrCodeNotActive => "QR code is not active",
            ErrorCode::CheckInWrongDay => "QR code is only valid on the lesson day",
            ErrorCode::AlreadyCheckedIn => "Already checked in for this lesson",

            // Lesson
            ErrorCode::LessonNotFound => "Lesson not found or inactive",
            ErrorCode::LessonFull => "Lesson is full for this date",
            ErrorCode::LessonWrongDay => "Lesson is not available on this day",
            ErrorCode::LessonDateNotFuture => "Lessons cannot be booked for today or past dates",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::TimeoutError => "Operation timed out",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::AccountDisabled),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::AdminRequired),

            // Membership
            3001 => Ok(ErrorCode::NoActiveMembership),
            3002 => Ok(ErrorCode::InsufficientCredits),
            3003 => Ok(ErrorCode::MembershipNotFound),
            3004 => Ok(ErrorCode::PackageNotFound),

            // Booking
            4001 => Ok(ErrorCode::BookingNotFound),
            4002 => Ok(ErrorCode::DuplicateBooking),
            4003 => Ok(ErrorCode::BookingAlreadyCancelled),
            4004 => Ok(ErrorCode::CancellationWindowClosed),
            4005 => Ok(ErrorCode::NotBookingOwner),
            4006 => Ok(ErrorCode::BookingNotConfirmed),

            // Check-in
            5001 => Ok(ErrorCode::QrCodeInvalid),
            5002 => Ok(ErrorCode::QrCodeNotActive),
            5003 => Ok(ErrorCode::CheckInWrongDay),
            5004 => Ok(ErrorCode::AlreadyCheckedIn),

            // Lesson
            6001 => Ok(ErrorCode::LessonNotFound),
            6002 => Ok(ErrorCode::LessonFull),
            6003 => Ok(ErrorCode::LessonWrongDay),
            6004 => Ok(ErrorCode::LessonDateNotFuture),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::ConfigError),
            9004 => Ok(ErrorCode::TimeoutError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
