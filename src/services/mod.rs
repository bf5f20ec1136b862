//! Application services sitting between the HTTP handlers and the
//! repository. Each function receives the authenticated caller explicitly;
//! there is no ambient session state.

use thiserror::Error;
use validator::Validate;

use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod bookings;
pub mod catalog;

/// Failures surfaced by service functions. The `Display` text of every
/// variant except `Internal` is safe to send to clients.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal(#[source] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound("Entity not found".to_string()),
            RepositoryError::ConstraintViolation(_) => {
                ServiceError::Conflict("Conflict with existing data".to_string())
            }
            other => ServiceError::Internal(other),
        }
    }
}

/// Runs the payload's `validator` rules, reporting the first violation.
pub(crate) fn validate_payload(payload: &impl Validate) -> ServiceResult<()> {
    payload.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, field_errors)| field_errors.iter())
            .filter_map(|error| error.message.as_ref().map(ToString::to_string))
            .next()
            .unwrap_or_else(|| "Invalid request".to_string());
        ServiceError::Validation(message)
    })
}
