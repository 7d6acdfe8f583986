//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: &'static str,
    pub message: String,
}

impl AppError {
    fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Pricing(e) => match e {
                PricingError::RoomNotFound(_)
                | PricingError::BookingNotFound(_)
                | PricingError::ReservationNotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
                PricingError::MissingRate { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "missing_rate")
                }
            },
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database"),
            AppError::Template(_) => (StatusCode::INTERNAL_SERVER_ERROR, "template"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();

        // Server-side failures are logged in full but reported generically
        let message = if status.is_server_error() {
            tracing::error!("{}", self);
            match error_type {
                "database" => "Database error".to_string(),
                "template" => "Template error".to_string(),
                _ => "Internal error".to_string(),
            }
        } else {
            tracing::debug!("{}", self);
            self.to_string()
        };

        (status, Json(ErrorResponse { error_type, message })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
