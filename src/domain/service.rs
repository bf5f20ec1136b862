use serde::{Deserialize, Serialize};

/// A bookable entry of the service catalog. `price` is the per-day rate and
/// `capacity` the number of bookings that may run concurrently on any day.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub price: f64,
    pub active: bool,
}

/// Data required to create a catalog entry.
#[derive(Clone, Debug)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub price: f64,
    pub active: bool,
}

/// Field-wise changes applied to an existing catalog entry. `None` leaves the
/// field untouched.
#[derive(Clone, Debug, Default)]
pub struct UpdateService {
    pub name: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub price: Option<f64>,
    pub active: Option<bool>,
}

impl UpdateService {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.capacity.is_none()
            && self.price.is_none()
            && self.active.is_none()
    }
}
