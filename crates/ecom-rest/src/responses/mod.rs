//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ecom_core::{EcomError, ErrorResponse, OperationResult};
use serde::Serialize;

/// Operation envelope rendered as an HTTP response.
///
/// The envelope body travels to the client unchanged; the HTTP status is
/// derived from it. A failure envelope means the target was not found.
pub struct Envelope<T>(pub OperationResult<T>);

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = if self.0.success {
            StatusCode::OK
        } else {
            StatusCode::NOT_FOUND
        };
        (status, Json(self.0)).into_response()
    }
}

/// Operation envelope for resource creation (201 on success).
pub struct Created<T>(pub OperationResult<T>);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let status = if self.0.success {
            StatusCode::CREATED
        } else {
            StatusCode::NOT_FOUND
        };
        (status, Json(self.0)).into_response()
    }
}

/// Application error type for Axum.
///
/// Wraps faults only; expected outcomes travel as [`Envelope`].
#[derive(Debug)]
pub struct AppError(pub EcomError);

impl From<EcomError> for AppError {
    fn from(err: EcomError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(ErrorResponse::from_error(&self.0));
        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Envelope<T>, AppError>;
