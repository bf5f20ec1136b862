use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::types::{BookingStatus, DateRange};

/// A stored booking.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub service_id: i32,
    pub period: DateRange,
    pub total_price: f64,
    pub status: BookingStatus,
}

/// A booking joined with the names needed to render it.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingRecord {
    pub booking: Booking,
    pub service_name: String,
    pub username: String,
}

/// Data required to create a booking.
#[derive(Clone, Debug)]
pub struct NewBooking {
    pub user_id: i32,
    pub service_id: i32,
    pub period: DateRange,
    pub total_price: f64,
    pub status: BookingStatus,
}

/// Field-wise changes applied to an existing booking. `None` leaves the field
/// untouched.
#[derive(Clone, Debug, Default)]
pub struct BookingChanges {
    pub user_id: Option<i32>,
    pub service_id: Option<i32>,
    pub period: Option<DateRange>,
    pub total_price: Option<f64>,
    pub status: Option<BookingStatus>,
}

impl BookingChanges {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.service_id.is_none()
            && self.period.is_none()
            && self.total_price.is_none()
            && self.status.is_none()
    }
}

/// Price quote for a candidate period: the per-day rate times the inclusive
/// day count. An inverted range quotes `0.0` so callers can surface a live
/// preview without special-casing half-filled input.
pub fn preview_price(price_per_day: f64, start: NaiveDate, end: NaiveDate) -> f64 {
    match DateRange::new(start, end) {
        Ok(period) => total_price(price_per_day, &period),
        Err(_) => 0.0,
    }
}

/// Authoritative total for a validated period.
pub fn total_price(price_per_day: f64, period: &DateRange) -> f64 {
    price_per_day * period.days() as f64
}
