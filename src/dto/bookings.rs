use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::booking::BookingRecord;
use crate::domain::types::BookingStatus;
use crate::models::auth::AuthenticatedUser;

#[derive(Debug, Deserialize, Validate)]
/// Body of `POST /bookings`. Dates arrive as `YYYY-MM-DD` strings and are
/// parsed by the service layer so malformed input gets a precise message.
pub struct CreateBookingPayload {
    pub service_id: i32,
    #[validate(length(min = 1, message = "Missing required field: start_date"))]
    pub start_date: String,
    #[validate(length(min = 1, message = "Missing required field: end_date"))]
    pub end_date: String,
    /// Client-side price preview. Accepted for wire compatibility; the stored
    /// total is always recomputed server-side.
    #[serde(default)]
    pub total_price: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
/// Body of `PUT /bookings/{id}`; every field is optional. `status` and
/// `user_id` are admin-only.
pub struct UpdateBookingPayload {
    pub service_id: Option<i32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub user_id: Option<i32>,
}

/// A booking as rendered for a given viewer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookingView {
    pub id: i32,
    pub user_id: i32,
    pub service_id: i32,
    pub service_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl BookingView {
    /// Shapes a record for `viewer`. The owning username is only exposed in
    /// the administrative view.
    pub fn for_viewer(record: BookingRecord, viewer: &AuthenticatedUser) -> Self {
        let booking = record.booking;
        Self {
            id: booking.id,
            user_id: booking.user_id,
            service_id: booking.service_id,
            service_name: record.service_name,
            start_date: booking.period.start(),
            end_date: booking.period.end(),
            total_price: booking.total_price,
            status: booking.status,
            username: viewer.is_admin().then_some(record.username),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::Booking;
    use crate::domain::types::{DateRange, Role};

    fn record() -> BookingRecord {
        let period = DateRange::new(
            "2024-07-01".parse().unwrap(),
            "2024-07-03".parse().unwrap(),
        )
        .unwrap();
        BookingRecord {
            booking: Booking {
                id: 5,
                user_id: 2,
                service_id: 9,
                period,
                total_price: 150.0,
                status: BookingStatus::Pending,
            },
            service_name: "Sauna".to_string(),
            username: "mario".to_string(),
        }
    }

    fn viewer(role: Role) -> AuthenticatedUser {
        AuthenticatedUser {
            id: 1,
            username: "viewer".to_string(),
            role,
        }
    }

    #[test]
    fn admin_view_carries_username() {
        let view = BookingView::for_viewer(record(), &viewer(Role::Admin));
        assert_eq!(view.username.as_deref(), Some("mario"));
    }

    #[test]
    fn user_view_omits_username() {
        let view = BookingView::for_viewer(record(), &viewer(Role::User));
        assert_eq!(view.username, None);
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("username").is_none());
        assert_eq!(json["service_name"], "Sauna");
        assert_eq!(json["start_date"], "2024-07-01");
        assert_eq!(json["status"], "pending");
    }
}
