use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::errors::AppError;

// GET /
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Automobile Service Booking API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/api/health",
            "bookings": "/api/bookings",
        },
    }))
}

// GET /api/health
pub async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Automobile Service API is running",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}
