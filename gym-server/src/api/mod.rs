//! API routes for gym-server

pub mod bookings;
pub mod health;
pub mod lessons;
pub mod memberships;

use axum::routing::{delete, get, post};
use axum::{Router, middleware};
use shared::error::ApiResponse;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ServiceError;
use crate::state::AppState;

/// Handler result carrying the unified response envelope
pub type ApiResult<T> = Result<ApiResponse<T>, ServiceError>;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Booking API - authentication required
    let protected = Router::new()
        .route(
            "/api/bookings",
            post(bookings::create_booking).get(bookings::list_bookings),
        )
        .route("/api/bookings/stats", get(bookings::booking_stats))
        .route("/api/bookings/{id}", delete(bookings::cancel_booking))
        .route("/api/bookings/checkin", post(bookings::check_in))
        .route("/api/lessons", get(lessons::list_lessons))
        .route("/api/lessons/date/{date}", get(lessons::lessons_by_date))
        .route("/api/memberships/me", get(memberships::my_membership))
        .route("/api/memberships/packages", get(memberships::list_packages))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_auth,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(protected)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
