use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::booking::{
    Booking as DomainBooking, BookingChanges, NewBooking as DomainNewBooking,
};
use crate::domain::types::{DateRange, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::bookings)]
/// Diesel model for [`crate::domain::booking::Booking`].
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub service_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
    pub status: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::bookings)]
/// Insertable form of [`Booking`].
pub struct NewBooking<'a> {
    pub user_id: i32,
    pub service_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
    pub status: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::bookings)]
/// Data used when updating a [`Booking`] record.
pub struct UpdateBooking<'a> {
    pub user_id: Option<i32>,
    pub service_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub total_price: Option<f64>,
    pub status: Option<&'a str>,
}

impl TryFrom<Booking> for DomainBooking {
    type Error = TypeConstraintError;

    fn try_from(booking: Booking) -> Result<Self, Self::Error> {
        Ok(Self {
            id: booking.id,
            user_id: booking.user_id,
            service_id: booking.service_id,
            period: DateRange::new(booking.start_date, booking.end_date)?,
            total_price: booking.total_price,
            status: booking.status.parse()?,
        })
    }
}

impl<'a> From<&'a DomainNewBooking> for NewBooking<'a> {
    fn from(booking: &'a DomainNewBooking) -> Self {
        Self {
            user_id: booking.user_id,
            service_id: booking.service_id,
            start_date: booking.period.start(),
            end_date: booking.period.end(),
            total_price: booking.total_price,
            status: booking.status.as_str(),
        }
    }
}

impl<'a> From<&'a BookingChanges> for UpdateBooking<'a> {
    fn from(changes: &'a BookingChanges) -> Self {
        Self {
            user_id: changes.user_id,
            service_id: changes.service_id,
            start_date: changes.period.map(|p| p.start()),
            end_date: changes.period.map(|p| p.end()),
            total_price: changes.total_price,
            status: changes.status.map(|s| s.as_str()),
        }
    }
}
