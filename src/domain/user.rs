use serde::Serialize;

use crate::domain::types::Role;

/// A registered account.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// PHC-formatted Argon2id hash; never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
}

/// Data required to create an account.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl NewUser {
    /// Normalizes the username (trimmed) and email (trimmed, lower-cased).
    /// New accounts always start with the `user` role.
    #[must_use]
    pub fn new(username: &str, email: &str, password_hash: String) -> Self {
        Self {
            username: username.trim().to_string(),
            email: email.trim().to_lowercase(),
            password_hash,
            role: Role::User,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_normalizes_fields() {
        let user = NewUser::new("  mario ", " Mario@Example.COM ", "hash".to_string());
        assert_eq!(user.username, "mario");
        assert_eq!(user.email, "mario@example.com");
        assert_eq!(user.role, Role::User);
    }
}
