//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::booking::{BookingChanges, BookingRecord, NewBooking};
use crate::domain::service::{NewService, Service, UpdateService};
use crate::domain::types::DateRange;
use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    BookingListQuery, BookingReader, BookingWriter, ServiceReader, ServiceWriter, UserReader,
    UserWriter,
};

mock! {
    pub Repository {}

    impl UserReader for Repository {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    }

    impl ServiceReader for Repository {
        fn get_service_by_id(&self, id: i32) -> RepositoryResult<Option<Service>>;
        fn list_services(&self, include_inactive: bool) -> RepositoryResult<Vec<Service>>;
    }

    impl ServiceWriter for Repository {
        fn create_service(&self, new_service: &NewService) -> RepositoryResult<Service>;
        fn update_service(
            &self,
            service_id: i32,
            updates: &UpdateService,
        ) -> RepositoryResult<Service>;
        fn delete_service(&self, service_id: i32) -> RepositoryResult<()>;
    }

    impl BookingReader for Repository {
        fn get_booking_by_id(&self, id: i32) -> RepositoryResult<Option<BookingRecord>>;
        fn list_bookings(&self, query: BookingListQuery) -> RepositoryResult<Vec<BookingRecord>>;
        fn count_overlapping_bookings(
            &self,
            service_id: i32,
            period: &DateRange,
            exclude_booking_id: Option<i32>,
        ) -> RepositoryResult<i64>;
    }

    impl BookingWriter for Repository {
        fn create_booking(&self, new_booking: &NewBooking) -> RepositoryResult<BookingRecord>;
        fn update_booking(
            &self,
            booking_id: i32,
            changes: &BookingChanges,
        ) -> RepositoryResult<BookingRecord>;
        fn delete_booking(&self, booking_id: i32) -> RepositoryResult<()>;
    }
}
