//! Session identity: signed claims carried in the identity cookie.
//!
//! On login the server encodes `{sub, username, role, exp}` into a JWT and
//! stores it as the Actix identity; every authenticated request decodes it
//! back into an [`AuthenticatedUser`]. The session therefore expires on its
//! own once `exp` passes, without server-side session storage.

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpRequest, web};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::types::Role;
use crate::domain::user::User;
use crate::models::config::ServerConfig;
use crate::routes::ApiError;

/// Lifetime of a session token, in minutes.
pub const SESSION_TTL_MINUTES: i64 = 60;

/// Claims embedded in the session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub username: String,
    pub role: Role,
    pub exp: usize,
}

/// The authenticated caller, decoded from the session cookie. Handlers take
/// this by extractor; service functions receive it explicitly instead of
/// reading ambient session state.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Signs a session token for `user`, valid for [`SESSION_TTL_MINUTES`].
pub fn issue_token(user: &User, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let expires_at = Utc::now() + chrono::Duration::minutes(SESSION_TTL_MINUTES);
    let claims = Claims {
        sub: user.id,
        username: user.username.clone(),
        role: user.role,
        exp: expires_at.timestamp() as usize,
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Decodes and verifies a session token, including its expiry.
pub fn decode_token(
    token: &str,
    secret: &str,
) -> Result<AuthenticatedUser, jsonwebtoken::errors::Error> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(AuthenticatedUser {
        id: data.claims.sub,
        username: data.claims.username,
        role: data.claims.role,
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let user = (|| {
            let identity = Identity::from_request(req, payload)
                .into_inner()
                .map_err(|_| ApiError::unauthorized())?;
            let token = identity.id().map_err(|_| ApiError::unauthorized())?;
            let config = req
                .app_data::<web::Data<ServerConfig>>()
                .ok_or_else(|| ApiError::Internal("server config missing from app data".into()))?;
            decode_token(&token, &config.secret).map_err(|_| ApiError::unauthorized())
        })();
        ready(user.map_err(Error::from))
    }
}
