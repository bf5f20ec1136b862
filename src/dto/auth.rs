use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::types::Role;
use crate::domain::user::User;

#[derive(Debug, Deserialize, Validate)]
/// Credentials submitted to `POST /login`.
pub struct LoginPayload {
    #[validate(length(min = 1, message = "Missing required field: username"))]
    pub username: String,
    #[validate(length(min = 1, message = "Missing required field: password"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
/// Account data submitted to `POST /users`.
pub struct RegisterPayload {
    #[validate(length(min = 1, message = "Missing required field: username"))]
    pub username: String,
    #[validate(
        length(min = 1, message = "Missing required field: email"),
        email(message = "Invalid email address")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Missing required field: password"))]
    pub password: String,
}

/// Account data returned on login and registration. Never carries password
/// material.
#[derive(Debug, Serialize, PartialEq)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}
