use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Booking, BookingStatus};
use crate::services::validation::{validate_booking, BookingDraft};
use crate::state::AppState;

#[derive(Serialize)]
pub struct BookingResponse {
    success: bool,
    message: &'static str,
    data: Booking,
}

// POST /api/bookings
#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub name: Option<String>,
    pub vehicle: Option<String>,
    pub service: Option<String>,
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    // Absent, null and "" all count as missing.
    let present = |field: Option<String>| field.filter(|v| !v.is_empty());
    let (Some(name), Some(vehicle), Some(service)) =
        (present(req.name), present(req.vehicle), present(req.service))
    else {
        tracing::warn!("booking rejected: missing required field");
        return Err(AppError::MissingField);
    };

    let draft = BookingDraft {
        name,
        vehicle,
        service,
        ..Default::default()
    };
    let new_booking = validate_booking(draft, Utc::now()).map_err(|e| {
        tracing::warn!(errors = %e, "booking rejected by validation");
        AppError::from(e)
    })?;

    let booking = state.store.insert(new_booking).await?;
    tracing::info!(id = %booking.id, service = booking.service.as_str(), "booking created");

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            success: true,
            message: "Booking created successfully",
            data: booking,
        }),
    ))
}

// GET /api/bookings
#[derive(Serialize)]
pub struct BookingListResponse {
    success: bool,
    count: usize,
    data: Vec<Booking>,
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BookingListResponse>, AppError> {
    let bookings = state.store.find_all().await?;

    Ok(Json(BookingListResponse {
        success: true,
        count: bookings.len(),
        data: bookings,
    }))
}

// PUT /api/bookings/:id
#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<serde_json::Value>,
}

pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<BookingResponse>, AppError> {
    // An unreadable body carries no status.
    let req = payload.map(|Json(req)| req).unwrap_or_else(|e| {
        tracing::debug!(detail = %e.body_text(), "unreadable status update body");
        UpdateStatusRequest { status: None }
    });

    let status = req
        .status
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(BookingStatus::parse)
        .ok_or_else(|| {
            tracing::warn!(%id, requested = ?req.status, "status update rejected: invalid status");
            AppError::InvalidStatus
        })?;

    let booking = state
        .store
        .update_status(&id, status)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!(id = %booking.id, status = status.as_str(), "booking status updated");

    Ok(Json(BookingResponse {
        success: true,
        message: "Booking status updated successfully",
        data: booking,
    }))
}
