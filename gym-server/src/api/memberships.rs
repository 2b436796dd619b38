//! Membership endpoints (read-only; purchase/approval is an external flow)

use axum::Extension;
use axum::extract::State;
use shared::error::ApiResponse;
use shared::models::{MembershipPackage, MembershipWithPackage};

use super::ApiResult;
use crate::auth::UserIdentity;
use crate::db;
use crate::state::AppState;

/// GET /api/memberships/me - the caller's active membership, if any
pub async fn my_membership(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
) -> ApiResult<Option<MembershipWithPackage>> {
    let membership =
        db::memberships::find_active_with_package(&state.db.pool, &identity.user_id).await?;
    Ok(ApiResponse::success(membership))
}

/// GET /api/memberships/packages
pub async fn list_packages(State(state): State<AppState>) -> ApiResult<Vec<MembershipPackage>> {
    let packages = db::memberships::list_active_packages(&state.db.pool).await?;
    Ok(ApiResponse::success(packages))
}
