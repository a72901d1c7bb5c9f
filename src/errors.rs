use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::services::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("All fields (name, vehicle, service) are required")]
    MissingField,

    #[error("Validation error")]
    Validation(Vec<String>),

    #[error("Invalid status. Must be: Pending, In Progress, or Completed")]
    InvalidStatus,

    #[error("Booking not found")]
    NotFound,

    #[error("Route not found")]
    RouteNotFound,

    #[error("Invalid request body")]
    BadRequest(String),

    #[error("storage unavailable: {0:#}")]
    StorageUnavailable(#[from] anyhow::Error),
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::Validation(err.0)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField
            | AppError::Validation(_)
            | AppError::InvalidStatus
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let mut message = self.to_string();

        let errors = match self {
            AppError::StorageUnavailable(e) => {
                tracing::error!(error = ?e, "booking storage failure");
                message = "Internal server error".to_string();
                None
            }
            AppError::BadRequest(detail) => {
                tracing::debug!(%detail, "rejected request body");
                None
            }
            AppError::Validation(errors) => Some(errors),
            _ => None,
        };

        let body = ErrorBody {
            success: false,
            message,
            errors,
        };
        (status, Json(body)).into_response()
    }
}
