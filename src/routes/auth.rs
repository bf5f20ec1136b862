use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, get, post, web};

use crate::dto::auth::{LoginPayload, RegisterPayload, UserResponse};
use crate::models::auth::{self, AuthenticatedUser};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::ApiError;
use crate::services;

#[post("/login")]
pub async fn login(
    req: HttpRequest,
    payload: web::Json<LoginPayload>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ApiError> {
    let user = services::auth::login(repo.get_ref(), &payload)?;

    let token = auth::issue_token(&user, &config.secret)
        .map_err(|e| ApiError::Internal(format!("failed to issue session token: {e}")))?;
    Identity::login(&req.extensions(), token)
        .map_err(|e| ApiError::Internal(format!("failed to establish session: {e}")))?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[post("/logout")]
pub async fn logout(user: Option<Identity>) -> Result<HttpResponse, ApiError> {
    match user {
        Some(user) => {
            user.logout();
            Ok(HttpResponse::NoContent().finish())
        }
        None => Err(ApiError::unauthorized()),
    }
}

#[get("/current-user")]
pub async fn current_user(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(user)
}

#[post("/users")]
pub async fn register(
    payload: web::Json<RegisterPayload>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let user = services::auth::register(repo.get_ref(), &payload)?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}
