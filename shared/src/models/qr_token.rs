//! QR Token Model

use serde::{Deserialize, Serialize};

/// QR token lifecycle status
///
/// `active → used` on successful check-in, `active → expired` when the
/// owning booking is cancelled. Both transitions are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum QrTokenStatus {
    Active,
    Used,
    Expired,
}

impl QrTokenStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Used => "used",
            Self::Expired => "expired",
        }
    }
}

/// Single-use check-in credential bound 1:1 to a booking
///
/// `code` is an opaque 32-character `[A-Z0-9]` string. `expires_at` is
/// midnight after the lesson date (the token is only accepted on the
/// lesson day itself, the expiry is a hard upper bound).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct QrToken {
    pub id: i64,
    pub booking_id: i64,
    pub code: String,
    pub status: QrTokenStatus,
    pub expires_at: i64,
    pub used_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}
