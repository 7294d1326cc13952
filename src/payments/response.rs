//! Mapping of service outcomes to HTTP response envelopes
//!
//! Each operation has its own constructor, because the same service error
//! maps differently per operation (a validation failure is `422` on create
//! but `400` on list). Every constructor matches the service result
//! exhaustively; outcomes an operation cannot produce fall back to the
//! generic `500` envelope.

use crate::core::{Payment, ServiceError, ServiceResult};
use crate::payments::service::Lookup;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

pub const INVALID_INPUT: &str = "Invalid input";
pub const INVALID_FILTER: &str = "Invalid Input";
pub const ID_REQUIRED: &str = "Payment ID is required";
pub const NOT_FOUND: &str = "Payment not found";
pub const EMPTY_FILTER: &str = "Currency parameter cannot be empty";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// A status code plus JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub status: StatusCode,
    pub body: Value,
}

impl Envelope {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    fn error(status: StatusCode, message: &str) -> Self {
        Self::new(status, json!({ "error": message }))
    }

    fn error_with_details(status: StatusCode, message: &str, details: Value) -> Self {
        Self::new(status, json!({ "error": message, "details": details }))
    }

    /// Fixed `500` body; the cause is logged, never returned
    pub fn internal_error() -> Self {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
    }

    /// Envelope for the create operation
    pub fn created(result: ServiceResult<String>) -> Self {
        match result {
            Ok(id) => Self::new(StatusCode::CREATED, json!({ "result": id })),
            Err(ServiceError::ValidationFailed(violations)) => Self::error_with_details(
                StatusCode::UNPROCESSABLE_ENTITY,
                INVALID_INPUT,
                json!(violations),
            ),
            Err(e @ ServiceError::StoreFailed(_))
            | Err(e @ ServiceError::MissingParameter { .. })
            | Err(e @ ServiceError::EmptyFilter) => Self::unexpected("create", &e),
        }
    }

    /// Envelope for the get-by-id operation
    pub fn fetched(result: ServiceResult<Lookup>) -> Self {
        match result {
            Ok(Lookup::Found(payment)) => Self::new(StatusCode::OK, json!(payment)),
            Ok(Lookup::NotFound(_)) => Self::error(StatusCode::NOT_FOUND, NOT_FOUND),
            Err(ServiceError::MissingParameter { .. }) => {
                Self::error(StatusCode::BAD_REQUEST, ID_REQUIRED)
            }
            Err(e @ ServiceError::StoreFailed(_))
            | Err(e @ ServiceError::ValidationFailed(_))
            | Err(e @ ServiceError::EmptyFilter) => Self::unexpected("get", &e),
        }
    }

    /// Envelope for the list operation
    pub fn listed(result: ServiceResult<Vec<Payment>>) -> Self {
        match result {
            Ok(payments) => Self::new(StatusCode::OK, json!({ "data": payments })),
            Err(ServiceError::EmptyFilter) => Self::error(StatusCode::BAD_REQUEST, EMPTY_FILTER),
            Err(ServiceError::ValidationFailed(violations)) => Self::error_with_details(
                StatusCode::BAD_REQUEST,
                INVALID_FILTER,
                json!(violations),
            ),
            Err(e @ ServiceError::StoreFailed(_))
            | Err(e @ ServiceError::MissingParameter { .. }) => Self::unexpected("list", &e),
        }
    }

    fn unexpected(operation: &str, err: &ServiceError) -> Self {
        tracing::error!(
            operation,
            code = err.error_code(),
            error = %err,
            "payment operation failed"
        );
        Self::internal_error()
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
