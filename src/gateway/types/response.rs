//! Wire-level response and error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Error envelope for non-2xx responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Short human-readable error summary.
    #[schema(example = "Validation failed")]
    pub error: String,
    /// Itemized validation messages, present only on 400 responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

/// API error carrying the HTTP status to respond with.
///
/// Client input errors and missing resources are expected outcomes built
/// from data; the internal variant is the only one that corresponds to a
/// logged service fault.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    /// 400 with the full list of validation messages.
    pub fn validation(details: Vec<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse {
                error: "Validation failed".to_string(),
                details: Some(details),
            },
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorResponse {
                error: msg.into(),
                details: None,
            },
        }
    }

    /// Opaque 500. The cause is logged at the boundary that caught it and
    /// never leaks to the caller; validation failures must not use this.
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorResponse {
                error: "Internal server error".to_string(),
                details: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Handler result: status + JSON body on success, [`ApiError`] otherwise.
pub type ApiResult<T> = Result<(StatusCode, Json<T>), ApiError>;
