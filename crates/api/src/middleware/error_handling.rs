//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint fails the same way.
//!
//! Configuration errors (a zero slot interval, a stored window that closes
//! before it opens) are the clinic's problem, not the patient's: the detail
//! goes to the log and the client only sees a generic 500.

use axum::{
    BoxError, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use consultorio_core::errors::ClinicError;
use serde_json::json;

/// Body returned instead of the real message for configuration errors.
pub const CONFIGURATION_ERROR_MESSAGE: &str = "Internal configuration error";

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use consultorio_api::middleware::error_handling::AppError;
/// use consultorio_core::errors::ClinicError;
///
/// async fn handler(found: bool) -> Result<Json<&'static str>, AppError> {
///     if !found {
///         return Err(AppError(ClinicError::NotFound("Service not found".to_string())));
///     }
///     Ok(Json("ok"))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ClinicError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ClinicError::NotFound(_) => StatusCode::NOT_FOUND,
            ClinicError::Validation(_) => StatusCode::BAD_REQUEST,
            ClinicError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ClinicError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ClinicError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self.0 {
            ClinicError::Configuration(detail) => {
                tracing::error!("Clinic configuration error: {}", detail);
                CONFIGURATION_ERROR_MESSAGE.to_string()
            }
            ClinicError::Database(_) | ClinicError::Internal(_) => {
                tracing::error!("{}", self.0);
                self.0.to_string()
            }
            _ => self.0.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Automatic conversion from ClinicError to AppError
impl From<ClinicError> for AppError {
    fn from(err: ClinicError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report, treated as a database failure
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ClinicError::Database(err))
    }
}

/// Turns errors from the timeout layer into responses.
pub async fn handle_timeout_error(err: BoxError) -> (StatusCode, Json<serde_json::Value>) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            Json(json!({ "error": "Request timed out" })),
        )
    } else {
        tracing::error!("Unhandled middleware error: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": err.to_string() })),
        )
    }
}
