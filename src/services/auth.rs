//! Login, registration, and password hashing.
//!
//! Password hashes use Argon2id in PHC string format so the parameters and
//! salt travel with the hash.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::domain::user::{NewUser, User};
use crate::dto::auth::{LoginPayload, RegisterPayload};
use crate::repository::errors::RepositoryError;
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult, validate_payload};

/// Hash a plaintext password into a PHC-formatted Argon2id string.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

fn invalid_credentials() -> ServiceError {
    ServiceError::Unauthorized("Invalid username or password".to_string())
}

/// Authenticates a username/password pair against stored credentials.
pub fn login<R>(repo: &R, payload: &LoginPayload) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    validate_payload(payload)?;

    let user = repo
        .get_user_by_username(payload.username.trim())?
        .ok_or_else(invalid_credentials)?;

    let verified =
        verify_password(&payload.password, &user.password_hash).map_err(|_| invalid_credentials())?;
    if !verified {
        return Err(invalid_credentials());
    }

    Ok(user)
}

/// Registers a new account with the `user` role.
pub fn register<R>(repo: &R, payload: &RegisterPayload) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    validate_payload(payload)?;

    let password_hash = hash_password(&payload.password)
        .map_err(|_| ServiceError::Validation("Password could not be processed".to_string()))?;
    let new_user = NewUser::new(&payload.username, &payload.email, password_hash);

    match repo.create_user(&new_user) {
        Ok(user) => Ok(user),
        Err(RepositoryError::ConstraintViolation(_)) => Err(ServiceError::Conflict(
            "Username or email already taken".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Role;
    use crate::repository::mock::MockRepository;

    fn stored_user(password: &str) -> User {
        User {
            id: 1,
            username: "mario".to_string(),
            email: "mario@example.com".to_string(),
            password_hash: hash_password(password).unwrap(),
            role: Role::User,
        }
    }

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("hunter2hunter2").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("hunter2hunter2", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn login_with_correct_password_returns_user() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_username()
            .withf(|username| username == "mario")
            .return_once(|_| Ok(Some(stored_user("secret-password"))));

        let payload = LoginPayload {
            username: "mario".to_string(),
            password: "secret-password".to_string(),
        };
        let user = login(&repo, &payload).unwrap();
        assert_eq!(user.username, "mario");
    }

    #[test]
    fn login_with_wrong_password_is_unauthorized() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_username()
            .return_once(|_| Ok(Some(stored_user("secret-password"))));

        let payload = LoginPayload {
            username: "mario".to_string(),
            password: "not-it".to_string(),
        };
        assert!(matches!(
            login(&repo, &payload),
            Err(ServiceError::Unauthorized(_))
        ));
    }

    #[test]
    fn login_with_unknown_username_is_unauthorized() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_username().return_once(|_| Ok(None));

        let payload = LoginPayload {
            username: "ghost".to_string(),
            password: "whatever".to_string(),
        };
        assert!(matches!(
            login(&repo, &payload),
            Err(ServiceError::Unauthorized(_))
        ));
    }

    #[test]
    fn register_rejects_empty_username() {
        let repo = MockRepository::new();
        let payload = RegisterPayload {
            username: "".to_string(),
            email: "a@example.com".to_string(),
            password: "pw".to_string(),
        };
        let err = register(&repo, &payload).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(err.to_string().contains("username"));
    }

    #[test]
    fn register_maps_unique_violation_to_conflict() {
        let mut repo = MockRepository::new();
        repo.expect_create_user().return_once(|_| {
            Err(RepositoryError::ConstraintViolation(
                "UNIQUE constraint failed: users.username".to_string(),
            ))
        });

        let payload = RegisterPayload {
            username: "mario".to_string(),
            email: "mario@example.com".to_string(),
            password: "secret-password".to_string(),
        };
        assert!(matches!(
            register(&repo, &payload),
            Err(ServiceError::Conflict(_))
        ));
    }
}
