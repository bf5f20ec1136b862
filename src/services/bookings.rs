//! Booking lifecycle: role-aware listing, creation, editing, deletion.
//!
//! One parameterized path serves both roles: the viewer decides the listing
//! scope and whether the owning username is exposed, instead of separate
//! admin/user code paths.

use chrono::{Local, NaiveDate};

use crate::domain::booking::{self, BookingChanges, BookingRecord, NewBooking};
use crate::domain::service::Service;
use crate::domain::types::{BookingStatus, DateRange};
use crate::dto::bookings::{BookingView, CreateBookingPayload, UpdateBookingPayload};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{
    BookingListQuery, BookingReader, BookingWriter, ServiceReader, UserReader,
};
use crate::services::{ServiceError, ServiceResult, validate_payload};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(field: &str, value: &str) -> ServiceResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ServiceError::Validation(format!("Invalid {field}: expected YYYY-MM-DD")))
}

fn booking_not_found() -> ServiceError {
    ServiceError::NotFound("Booking not found".to_string())
}

fn bookable_service<R>(repo: &R, service_id: i32) -> ServiceResult<Service>
where
    R: ServiceReader + ?Sized,
{
    repo.get_service_by_id(service_id)?
        .filter(|service| service.active)
        .ok_or_else(|| ServiceError::Validation("Unknown or inactive service".to_string()))
}

fn ensure_available<R>(
    repo: &R,
    service: &Service,
    period: &DateRange,
    exclude_booking_id: Option<i32>,
) -> ServiceResult<()>
where
    R: BookingReader + ?Sized,
{
    let booked = repo.count_overlapping_bookings(service.id, period, exclude_booking_id)?;
    if booked >= i64::from(service.capacity) {
        return Err(ServiceError::Conflict(
            "Service is fully booked for the selected period".to_string(),
        ));
    }
    Ok(())
}

/// Loads a booking enforcing visibility: owners see their own, admins see
/// everything, everyone else gets a 404 rather than a hint that the id
/// exists.
fn visible_booking<R>(
    repo: &R,
    viewer: &AuthenticatedUser,
    booking_id: i32,
) -> ServiceResult<BookingRecord>
where
    R: BookingReader + ?Sized,
{
    let record = repo
        .get_booking_by_id(booking_id)?
        .ok_or_else(booking_not_found)?;
    if !viewer.is_admin() && record.booking.user_id != viewer.id {
        return Err(booking_not_found());
    }
    Ok(record)
}

/// The booking list as seen by `viewer`: admins get every booking with the
/// owning username attached, regular users only their own.
pub fn list_bookings<R>(repo: &R, viewer: &AuthenticatedUser) -> ServiceResult<Vec<BookingView>>
where
    R: BookingReader + ?Sized,
{
    let query = if viewer.is_admin() {
        BookingListQuery::new()
    } else {
        BookingListQuery::new().for_user(viewer.id)
    };
    let records = repo.list_bookings(query)?;
    Ok(records
        .into_iter()
        .map(|record| BookingView::for_viewer(record, viewer))
        .collect())
}

pub fn get_booking<R>(
    repo: &R,
    viewer: &AuthenticatedUser,
    booking_id: i32,
) -> ServiceResult<BookingView>
where
    R: BookingReader + ?Sized,
{
    let record = visible_booking(repo, viewer, booking_id)?;
    Ok(BookingView::for_viewer(record, viewer))
}

/// Creates a booking for the viewer. The total price is computed here from
/// the service's per-day rate and the inclusive day count; any client-side
/// preview in the payload is ignored.
pub fn create_booking<R>(
    repo: &R,
    viewer: &AuthenticatedUser,
    payload: &CreateBookingPayload,
) -> ServiceResult<BookingView>
where
    R: BookingReader + BookingWriter + ServiceReader + ?Sized,
{
    validate_payload(payload)?;

    let start = parse_date("start_date", &payload.start_date)?;
    let end = parse_date("end_date", &payload.end_date)?;
    let period =
        DateRange::new(start, end).map_err(|e| ServiceError::Validation(e.to_string()))?;
    if period.start() < Local::now().date_naive() {
        return Err(ServiceError::Validation(
            "Start date cannot be in the past".to_string(),
        ));
    }

    let service = bookable_service(repo, payload.service_id)?;
    ensure_available(repo, &service, &period, None)?;

    let new_booking = NewBooking {
        user_id: viewer.id,
        service_id: service.id,
        period,
        total_price: booking::total_price(service.price, &period),
        status: BookingStatus::Pending,
    };
    let record = repo.create_booking(&new_booking)?;
    Ok(BookingView::for_viewer(record, viewer))
}

/// Applies a partial update. Owners may reschedule their own booking;
/// `status` and `user_id` are reserved to administrators, with no
/// restriction on which status follows which.
pub fn update_booking<R>(
    repo: &R,
    viewer: &AuthenticatedUser,
    booking_id: i32,
    payload: &UpdateBookingPayload,
) -> ServiceResult<BookingView>
where
    R: BookingReader + BookingWriter + ServiceReader + UserReader + ?Sized,
{
    let record = visible_booking(repo, viewer, booking_id)?;
    let current = &record.booking;

    if (payload.status.is_some() || payload.user_id.is_some()) && !viewer.is_admin() {
        return Err(ServiceError::Forbidden(
            "Only administrators can change booking status or assignee".to_string(),
        ));
    }

    let status = payload
        .status
        .as_deref()
        .map(|value| {
            value
                .parse::<BookingStatus>()
                .map_err(|e| ServiceError::Validation(e.to_string()))
        })
        .transpose()?;

    if let Some(user_id) = payload.user_id
        && user_id != current.user_id
        && repo.get_user_by_id(user_id)?.is_none()
    {
        return Err(ServiceError::Validation("Unknown user".to_string()));
    }

    let mut changes = BookingChanges {
        status,
        user_id: payload.user_id,
        ..BookingChanges::default()
    };

    let rescheduled =
        payload.service_id.is_some() || payload.start_date.is_some() || payload.end_date.is_some();
    if rescheduled {
        let start = match &payload.start_date {
            Some(value) => parse_date("start_date", value)?,
            None => current.period.start(),
        };
        let end = match &payload.end_date {
            Some(value) => parse_date("end_date", value)?,
            None => current.period.end(),
        };
        let period =
            DateRange::new(start, end).map_err(|e| ServiceError::Validation(e.to_string()))?;
        if !viewer.is_admin() && period.start() < Local::now().date_naive() {
            return Err(ServiceError::Validation(
                "Start date cannot be in the past".to_string(),
            ));
        }

        let service = bookable_service(repo, payload.service_id.unwrap_or(current.service_id))?;
        ensure_available(repo, &service, &period, Some(booking_id))?;

        changes.service_id = Some(service.id);
        changes.period = Some(period);
        changes.total_price = Some(booking::total_price(service.price, &period));
    }

    if changes.is_empty() {
        return Ok(BookingView::for_viewer(record, viewer));
    }

    let updated = repo.update_booking(booking_id, &changes)?;
    Ok(BookingView::for_viewer(updated, viewer))
}

/// Deletes a booking the viewer is allowed to see. Removes exactly that
/// booking.
pub fn delete_booking<R>(
    repo: &R,
    viewer: &AuthenticatedUser,
    booking_id: i32,
) -> ServiceResult<()>
where
    R: BookingReader + BookingWriter + ?Sized,
{
    visible_booking(repo, viewer, booking_id)?;
    repo.delete_booking(booking_id)?;
    Ok(())
}
