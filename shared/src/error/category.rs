//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Membership errors
/// - 4xxx: Booking errors
/// - 5xxx: Check-in errors
/// - 6xxx: Lesson errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Membership errors (3xxx)
    Membership,
    /// Booking errors (4xxx)
    Booking,
    /// Check-in errors (5xxx)
    CheckIn,
    /// Lesson errors (6xxx)
    Lesson,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Membership,
            4000..5000 => Self::Booking,
            5000..6000 => Self::CheckIn,
            6000..7000 => Self::Lesson,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Membership => "membership",
            Self::Booking => "booking",
            Self::CheckIn => "check_in",
            Self::Lesson => "lesson",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Membership);
        assert_eq!(ErrorCategory::from_code(4002), ErrorCategory::Booking);
        assert_eq!(ErrorCategory::from_code(5003), ErrorCategory::CheckIn);
        assert_eq!(ErrorCategory::from_code(6002), ErrorCategory::Lesson);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::TokenExpired.category(), ErrorCategory::Auth);
        assert_eq!(ErrorCode::AdminRequired.category(), ErrorCategory::Permission);
        assert_eq!(
            ErrorCode::InsufficientCredits.category(),
            ErrorCategory::Membership
        );
        assert_eq!(ErrorCode::DuplicateBooking.category(), ErrorCategory::Booking);
        assert_eq!(ErrorCode::QrCodeNotActive.category(), ErrorCategory::CheckIn);
        assert_eq!(ErrorCode::LessonFull.category(), ErrorCategory::Lesson);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::Membership.name(), "membership");
        assert_eq!(ErrorCategory::Booking.name(), "booking");
        assert_eq!(ErrorCategory::CheckIn.name(), "check_in");
        assert_eq!(ErrorCategory::Lesson.name(), "lesson");
        assert_eq!(ErrorCategory::System.name(), "system");
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::CheckIn).unwrap();
        assert_eq!(json, "\"check_in\"");

        let category: ErrorCategory = serde_json::from_str("\"booking\"").unwrap();
        assert_eq!(category, ErrorCategory::Booking);
    }
}
