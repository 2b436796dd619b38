//! User authentication for the booking API
//!
//! Identity is an external collaborator: registration and token issuance
//! live in the auth service. Here a middleware verifies the bearer token
//! and injects a [`UserIdentity`] extension for the handlers.

pub mod jwt;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared::error::AppError;

use crate::state::AppState;

/// Platform roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    User,
    Trainer,
    Admin,
}

impl UserRole {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "trainer" => Some(Self::Trainer),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Trainer => "trainer",
            Self::Admin => "admin",
        }
    }
}

/// Authenticated user identity extracted from the JWT
#[derive(Debug, Clone)]
pub struct UserIdentity {
    pub user_id: String,
    pub email: String,
    pub role: UserRole,
}

/// Middleware that verifies the bearer token and injects [`UserIdentity`]
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::not_authenticated().into_response())?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::not_authenticated().into_response())?;

    let claims = jwt::verify_token(token, &state.jwt_secret)
        .map_err(|e| e.into_response())?;

    let role = UserRole::from_str(&claims.role)
        .ok_or_else(|| AppError::invalid_token("Unknown role").into_response())?;

    let identity = UserIdentity {
        user_id: claims.sub,
        email: claims.email,
        role,
    };

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::User, UserRole::Trainer, UserRole::Admin] {
            assert_eq!(UserRole::from_str(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_unknown_role() {
        assert_eq!(UserRole::from_str("superuser"), None);
    }
}
