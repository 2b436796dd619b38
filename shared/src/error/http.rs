//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::BookingNotFound
            | Self::LessonNotFound
            | Self::MembershipNotFound
            | Self::PackageNotFound
            | Self::QrCodeInvalid => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::DuplicateBooking
            | Self::BookingAlreadyCancelled
            | Self::AlreadyCheckedIn => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::AccountDisabled => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied
            | Self::RoleRequired
            | Self::AdminRequired
            | Self::NotBookingOwner => StatusCode::FORBIDDEN,

            // 500 Internal Server Error
            Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,

            // 503 Service Unavailable (transient, client can retry)
            Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::BookingNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::LessonNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::QrCodeInvalid.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_status() {
        assert_eq!(ErrorCode::DuplicateBooking.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::BookingAlreadyCancelled.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(ErrorCode::AlreadyCheckedIn.http_status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_auth_status() {
        assert_eq!(
            ErrorCode::NotAuthenticated.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ErrorCode::TokenExpired.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::NotBookingOwner.http_status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_business_rule_status() {
        assert_eq!(ErrorCode::LessonFull.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::LessonWrongDay.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::CancellationWindowClosed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::InsufficientCredits.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::QrCodeNotActive.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_system_status() {
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::TimeoutError.http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
