//! Request and response payloads of the JSON API.

pub mod auth;
pub mod bookings;
pub mod catalog;
