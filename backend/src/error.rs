//! Error handling for the Agricultural Production Dashboard
//!
//! Every handler error becomes a JSON body of the form
//! `{"error": {"code", "message", "field"}}`.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::PresentError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No record found for year {year}")]
    ExactMatch { year: i32 },

    #[error("Year {year} is outside the available range {min}-{max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("Table contains no records")]
    EmptyTable,

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Invalid year: {0}")]
    InvalidYear(String),
}

impl From<PresentError> for AppError {
    fn from(err: PresentError) -> Self {
        match err {
            PresentError::ExactMatch { year } => AppError::ExactMatch { year },
            PresentError::OutOfRange { year, min, max } => {
                AppError::YearOutOfRange { year, min, max }
            }
            PresentError::EmptyTable => AppError::EmptyTable,
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidYear(rejection.body_text())
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str, Option<&'static str>) {
        match self {
            AppError::ExactMatch { .. } => {
                (StatusCode::NOT_FOUND, "EXACT_MATCH_NOT_FOUND", Some("year"))
            }
            AppError::YearOutOfRange { .. } => {
                (StatusCode::BAD_REQUEST, "YEAR_OUT_OF_RANGE", Some("year"))
            }
            AppError::EmptyTable => (StatusCode::SERVICE_UNAVAILABLE, "EMPTY_TABLE", None),
            AppError::UnknownMetric(_) => (StatusCode::NOT_FOUND, "UNKNOWN_METRIC", Some("metric")),
            AppError::InvalidYear(_) => (StatusCode::BAD_REQUEST, "YEAR_INVALID", Some("year")),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, field) = self.status_and_code();

        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field: field.map(str::to_string),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
