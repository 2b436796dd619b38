//! Membership Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Membership lifecycle status
///
/// Created `pending` on package purchase; transitions to `active` with
/// the full credit allowance once payment is approved (external flow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    Pending,
    Active,
    Expired,
    Cancelled,
    Suspended,
}

impl MembershipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Cancelled => "cancelled",
            Self::Suspended => "suspended",
        }
    }
}

/// Membership entity
///
/// A time-bounded credit allowance purchased by a user. At most one
/// `active` membership exists per user at any time (purchase-flow
/// invariant). `credits_remaining` is only ever mutated through atomic
/// conditional updates and never goes negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Membership {
    pub id: i64,
    pub user_id: String,
    pub package_id: i64,
    pub status: MembershipStatus,
    pub credits_remaining: i64,
    pub credits_total: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Membership package (reference data, read-only here)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MembershipPackage {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub credits: i64,
    pub validity_days: i64,
    pub is_active: bool,
    pub created_at: i64,
}

/// Membership with its package info (for the "my membership" view)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MembershipWithPackage {
    pub id: i64,
    pub user_id: String,
    pub status: MembershipStatus,
    pub credits_remaining: i64,
    pub credits_total: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: i64,
    pub package_id: i64,
    pub package_name: String,
    pub package_description: Option<String>,
    pub package_price: f64,
    pub package_credits: i64,
    pub package_validity_days: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str() {
        assert_eq!(MembershipStatus::Active.as_str(), "active");
        assert_eq!(MembershipStatus::Suspended.as_str(), "suspended");
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&MembershipStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        let status: MembershipStatus = serde_json::from_str("\"expired\"").unwrap();
        assert_eq!(status, MembershipStatus::Expired);
    }
}
