use diesel::prelude::*;

use crate::domain::booking::{BookingChanges, BookingRecord, NewBooking};
use crate::domain::types::{BookingStatus, DateRange};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{BookingListQuery, BookingReader, BookingWriter, DieselRepository};

fn into_record(
    (booking, service_name, username): (crate::models::booking::Booking, String, String),
) -> RepositoryResult<BookingRecord> {
    Ok(BookingRecord {
        booking: booking.try_into()?,
        service_name,
        username,
    })
}

impl BookingReader for DieselRepository {
    fn get_booking_by_id(&self, id: i32) -> RepositoryResult<Option<BookingRecord>> {
        use crate::models::booking::Booking as DbBooking;
        use crate::schema::{bookings, services, users};

        let mut conn = self.conn()?;
        let row = bookings::table
            .inner_join(services::table)
            .inner_join(users::table)
            .filter(bookings::id.eq(id))
            .select((DbBooking::as_select(), services::name, users::username))
            .first::<(DbBooking, String, String)>(&mut conn)
            .optional()?;

        row.map(into_record).transpose()
    }

    fn list_bookings(&self, query: BookingListQuery) -> RepositoryResult<Vec<BookingRecord>> {
        use crate::models::booking::Booking as DbBooking;
        use crate::schema::{bookings, services, users};

        let mut conn = self.conn()?;
        let mut stmt = bookings::table
            .inner_join(services::table)
            .inner_join(users::table)
            .order(bookings::id.asc())
            .select((DbBooking::as_select(), services::name, users::username))
            .into_boxed();
        if let Some(user_id) = query.user_id {
            stmt = stmt.filter(bookings::user_id.eq(user_id));
        }

        stmt.load::<(DbBooking, String, String)>(&mut conn)?
            .into_iter()
            .map(into_record)
            .collect()
    }

    fn count_overlapping_bookings(
        &self,
        service_id: i32,
        period: &DateRange,
        exclude_booking_id: Option<i32>,
    ) -> RepositoryResult<i64> {
        use crate::schema::bookings;

        let mut conn = self.conn()?;
        // Two inclusive ranges overlap iff each starts no later than the
        // other ends. Cancelled bookings release their capacity.
        let mut stmt = bookings::table
            .filter(bookings::service_id.eq(service_id))
            .filter(bookings::status.ne(BookingStatus::Cancelled.as_str()))
            .filter(bookings::start_date.le(period.end()))
            .filter(bookings::end_date.ge(period.start()))
            .into_boxed();
        if let Some(exclude) = exclude_booking_id {
            stmt = stmt.filter(bookings::id.ne(exclude));
        }

        Ok(stmt.count().get_result(&mut conn)?)
    }
}

impl BookingWriter for DieselRepository {
    fn create_booking(&self, new_booking: &NewBooking) -> RepositoryResult<BookingRecord> {
        use crate::models::booking::{Booking as DbBooking, NewBooking as DbNewBooking};
        use crate::schema::bookings;

        let created_id = {
            let mut conn = self.conn()?;
            let insertable: DbNewBooking = new_booking.into();
            diesel::insert_into(bookings::table)
                .values(&insertable)
                .get_result::<DbBooking>(&mut conn)?
                .id
        };

        self.get_booking_by_id(created_id)?
            .ok_or(RepositoryError::NotFound)
    }

    fn update_booking(
        &self,
        booking_id: i32,
        changes: &BookingChanges,
    ) -> RepositoryResult<BookingRecord> {
        use crate::models::booking::{Booking as DbBooking, UpdateBooking as DbUpdateBooking};
        use crate::schema::bookings;

        {
            let mut conn = self.conn()?;
            let db_changes: DbUpdateBooking = changes.into();
            diesel::update(bookings::table.find(booking_id))
                .set(&db_changes)
                .get_result::<DbBooking>(&mut conn)?;
        }

        self.get_booking_by_id(booking_id)?
            .ok_or(RepositoryError::NotFound)
    }

    fn delete_booking(&self, booking_id: i32) -> RepositoryResult<()> {
        use crate::schema::bookings;

        let mut conn = self.conn()?;
        let affected = diesel::delete(bookings::table.find(booking_id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
