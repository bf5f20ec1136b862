//! HTTP surface of the booking API.
//!
//! Every failure, whatever the layer it originated in, reaches the wire as a
//! JSON object with a single `error` field so clients never have to guess the
//! field name.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::services::ServiceError;

pub mod auth;
pub mod bookings;
pub mod catalog;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Unexpected failure outside the service layer. The message is logged,
    /// never sent.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn unauthorized() -> Self {
        Self::Service(ServiceError::Unauthorized(
            "Authentication required".to_string(),
        ))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Service(ServiceError::Unauthorized(_)) => StatusCode::UNAUTHORIZED,
            ApiError::Service(ServiceError::Forbidden(_)) => StatusCode::FORBIDDEN,
            ApiError::Service(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Service(ServiceError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Service(ServiceError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Service(ServiceError::Internal(_)) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Service(ServiceError::Internal(source)) => {
                log::error!("request failed: {source}");
            }
            ApiError::Internal(message) => {
                log::error!("request failed: {message}");
            }
            _ => {}
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Fallback for routes no handler claims.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Not found" }))
}

/// 400 handler for malformed JSON bodies.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(json!({ "error": "Invalid JSON" }));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// 400 handler for non-numeric path ids.
pub fn path_error_handler(
    err: actix_web::error::PathError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(json!({ "error": "Invalid ID" }));
    actix_web::error::InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_error_taxonomy() {
        let cases = [
            (
                ApiError::from(ServiceError::Unauthorized("x".into())),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::from(ServiceError::Forbidden("x".into())),
                StatusCode::FORBIDDEN,
            ),
            (
                ApiError::from(ServiceError::NotFound("x".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(ServiceError::Validation("x".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(ServiceError::Conflict("x".into())),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected);
        }
    }

    #[test]
    fn internal_errors_never_leak_their_message() {
        let error = ApiError::Internal("secret detail".into());
        assert_eq!(error.to_string(), "Internal server error");
    }
}
