use serde::Deserialize;
use validator::Validate;

use crate::domain::service::{NewService, UpdateService};

fn default_capacity() -> i32 {
    1
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
/// Body of `POST /services` (administrators only).
pub struct CreateServicePayload {
    #[validate(length(min = 1, message = "Missing required field: name"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_capacity")]
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: i32,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Default, Deserialize, Validate)]
/// Body of `PUT /services/{id}` (administrators only); every field is
/// optional.
pub struct UpdateServicePayload {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: Option<i32>,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,
    pub active: Option<bool>,
}

impl From<&CreateServicePayload> for NewService {
    fn from(payload: &CreateServicePayload) -> Self {
        Self {
            name: payload.name.trim().to_string(),
            description: payload.description.trim().to_string(),
            capacity: payload.capacity,
            price: payload.price,
            active: payload.active,
        }
    }
}

impl From<&UpdateServicePayload> for UpdateService {
    fn from(payload: &UpdateServicePayload) -> Self {
        Self {
            name: payload.name.as_ref().map(|s| s.trim().to_string()),
            description: payload.description.as_ref().map(|s| s.trim().to_string()),
            capacity: payload.capacity,
            price: payload.price,
            active: payload.active,
        }
    }
}
