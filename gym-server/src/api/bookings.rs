//! Booking endpoints: create, list, cancel, stats, QR check-in

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::error::ApiResponse;
use shared::models::{Booking, BookingDetail, BookingStats, BookingStatus};

use super::ApiResult;
use crate::auth::UserIdentity;
use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

/// POST /api/bookings
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub lesson_id: i64,
    pub lesson_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct CreateBookingResponse {
    pub booking: Booking,
    pub qr_code: String,
    pub remaining_credits: i64,
}

pub async fn create_booking(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let created = state
        .engine
        .create_booking(&identity.user_id, req.lesson_id, req.lesson_date)
        .await?;

    let body = ApiResponse::success_with_message(
        "Booking created",
        CreateBookingResponse {
            booking: created.booking,
            qr_code: created.qr_code,
            remaining_credits: created.remaining_credits,
        },
    );
    Ok((StatusCode::CREATED, Json(body)))
}

/// GET /api/bookings
#[derive(Debug, Deserialize)]
pub struct ListBookingsQuery {
    pub status: Option<BookingStatus>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

#[derive(Debug, Serialize)]
pub struct ListBookingsResponse {
    pub bookings: Vec<BookingDetail>,
    pub pagination: Pagination,
}

pub async fn list_bookings(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Query(query): Query<ListBookingsQuery>,
) -> ApiResult<ListBookingsResponse> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    let offset = (page - 1) * limit;

    let total = db::bookings::count_for_user(&state.db.pool, &identity.user_id, query.status)
        .await?;
    let bookings = db::bookings::list_for_user(
        &state.db.pool,
        &identity.user_id,
        query.status,
        limit,
        offset,
    )
    .await?;

    Ok(ApiResponse::success(ListBookingsResponse {
        bookings,
        pagination: Pagination {
            page,
            limit,
            total,
            total_pages: (total + limit - 1) / limit,
        },
    }))
}

/// GET /api/bookings/stats
pub async fn booking_stats(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
) -> ApiResult<BookingStats> {
    let stats = state.engine.booking_stats(&identity.user_id).await?;
    Ok(ApiResponse::success(stats))
}

/// DELETE /api/bookings/{id}
pub async fn cancel_booking(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Path(booking_id): Path<i64>,
) -> ApiResult<()> {
    state
        .engine
        .cancel_booking(booking_id, &identity.user_id)
        .await?;
    Ok(ApiResponse::success_with_message("Booking cancelled", ()))
}

/// POST /api/bookings/checkin
#[derive(Debug, Deserialize)]
pub struct CheckInRequest {
    pub qr_code: String,
}

#[derive(Debug, Serialize)]
pub struct CheckInResponse {
    pub lesson_name: String,
    pub start_time: String,
    pub end_time: String,
    pub check_in_time: i64,
}

pub async fn check_in(
    State(state): State<AppState>,
    Json(req): Json<CheckInRequest>,
) -> ApiResult<CheckInResponse> {
    let receipt = state.engine.check_in(&req.qr_code).await?;
    Ok(ApiResponse::success_with_message(
        "Check-in completed",
        CheckInResponse {
            lesson_name: receipt.lesson_name,
            start_time: receipt.start_time,
            end_time: receipt.end_time,
            check_in_time: receipt.check_in_time,
        },
    ))
}
