use crate::db::DbPool;
use crate::domain::booking::{BookingChanges, BookingRecord, NewBooking};
use crate::domain::service::{NewService, Service, UpdateService};
use crate::domain::types::DateRange;
use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;

pub mod booking;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod service;
pub mod user;

/// Filters applied when listing bookings.
#[derive(Debug, Clone, Default)]
pub struct BookingListQuery {
    pub user_id: Option<i32>,
}

impl BookingListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the listing to bookings owned by `user_id`.
    pub fn for_user(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
}

pub trait ServiceReader {
    fn get_service_by_id(&self, id: i32) -> RepositoryResult<Option<Service>>;
    fn list_services(&self, include_inactive: bool) -> RepositoryResult<Vec<Service>>;
}

pub trait ServiceWriter {
    fn create_service(&self, new_service: &NewService) -> RepositoryResult<Service>;
    fn update_service(&self, service_id: i32, updates: &UpdateService)
    -> RepositoryResult<Service>;
    fn delete_service(&self, service_id: i32) -> RepositoryResult<()>;
}

pub trait BookingReader {
    fn get_booking_by_id(&self, id: i32) -> RepositoryResult<Option<BookingRecord>>;
    fn list_bookings(&self, query: BookingListQuery) -> RepositoryResult<Vec<BookingRecord>>;
    /// Number of non-cancelled bookings of `service_id` sharing at least one
    /// day with `period`, optionally ignoring one booking (the one being
    /// edited).
    fn count_overlapping_bookings(
        &self,
        service_id: i32,
        period: &DateRange,
        exclude_booking_id: Option<i32>,
    ) -> RepositoryResult<i64>;
}

pub trait BookingWriter {
    fn create_booking(&self, new_booking: &NewBooking) -> RepositoryResult<BookingRecord>;
    fn update_booking(
        &self,
        booking_id: i32,
        changes: &BookingChanges,
    ) -> RepositoryResult<BookingRecord>;
    fn delete_booking(&self, booking_id: i32) -> RepositoryResult<()>;
}

/// Diesel implementation of every repository trait in this module.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(self.pool.get()?)
    }
}
