//! Service catalog lookup and administrative management.

use crate::domain::service::{Service, UpdateService};
use crate::dto::catalog::{CreateServicePayload, UpdateServicePayload};
use crate::models::auth::AuthenticatedUser;
use crate::repository::errors::RepositoryError;
use crate::repository::{ServiceReader, ServiceWriter};
use crate::services::{ServiceError, ServiceResult, validate_payload};

fn service_not_found() -> ServiceError {
    ServiceError::NotFound("Service not found".to_string())
}

fn ensure_admin(viewer: &AuthenticatedUser) -> ServiceResult<()> {
    if viewer.is_admin() {
        Ok(())
    } else {
        Err(ServiceError::Forbidden(
            "Administrator role required".to_string(),
        ))
    }
}

/// The catalog as seen by `viewer`: inactive services are only listed for
/// administrators. Each entry carries its per-day `price` so consumers can
/// quote totals without a second round trip.
pub fn list_services<R>(repo: &R, viewer: &AuthenticatedUser) -> ServiceResult<Vec<Service>>
where
    R: ServiceReader + ?Sized,
{
    Ok(repo.list_services(viewer.is_admin())?)
}

pub fn get_service<R>(
    repo: &R,
    viewer: &AuthenticatedUser,
    service_id: i32,
) -> ServiceResult<Service>
where
    R: ServiceReader + ?Sized,
{
    repo.get_service_by_id(service_id)?
        .filter(|service| service.active || viewer.is_admin())
        .ok_or_else(service_not_found)
}

pub fn create_service<R>(
    repo: &R,
    viewer: &AuthenticatedUser,
    payload: &CreateServicePayload,
) -> ServiceResult<Service>
where
    R: ServiceWriter + ?Sized,
{
    ensure_admin(viewer)?;
    validate_payload(payload)?;
    Ok(repo.create_service(&payload.into())?)
}

pub fn update_service<R>(
    repo: &R,
    viewer: &AuthenticatedUser,
    service_id: i32,
    payload: &UpdateServicePayload,
) -> ServiceResult<Service>
where
    R: ServiceReader + ServiceWriter + ?Sized,
{
    ensure_admin(viewer)?;
    validate_payload(payload)?;

    let current = repo
        .get_service_by_id(service_id)?
        .ok_or_else(service_not_found)?;

    let updates: UpdateService = payload.into();
    if updates.is_empty() {
        return Ok(current);
    }

    Ok(repo.update_service(service_id, &updates)?)
}

/// Removes a catalog entry. Entries still referenced by bookings are kept and
/// reported as a conflict.
pub fn delete_service<R>(
    repo: &R,
    viewer: &AuthenticatedUser,
    service_id: i32,
) -> ServiceResult<()>
where
    R: ServiceReader + ServiceWriter + ?Sized,
{
    ensure_admin(viewer)?;

    match repo.delete_service(service_id) {
        Ok(()) => Ok(()),
        Err(RepositoryError::NotFound) => Err(service_not_found()),
        Err(RepositoryError::ConstraintViolation(_)) => Err(ServiceError::Conflict(
            "Service has existing bookings".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}
