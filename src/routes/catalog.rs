use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::dto::catalog::{CreateServicePayload, UpdateServicePayload};
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::ApiError;
use crate::services;

#[get("/services")]
pub async fn list_services(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let services = services::catalog::list_services(repo.get_ref(), &user)?;
    Ok(HttpResponse::Ok().json(services))
}

#[get("/services/{id}")]
pub async fn get_service(
    service_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let service = services::catalog::get_service(repo.get_ref(), &user, service_id.into_inner())?;
    Ok(HttpResponse::Ok().json(service))
}

#[post("/services")]
pub async fn create_service(
    user: AuthenticatedUser,
    payload: web::Json<CreateServicePayload>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let service = services::catalog::create_service(repo.get_ref(), &user, &payload)?;
    Ok(HttpResponse::Created().json(service))
}

#[put("/services/{id}")]
pub async fn update_service(
    service_id: web::Path<i32>,
    user: AuthenticatedUser,
    payload: web::Json<UpdateServicePayload>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let service = services::catalog::update_service(
        repo.get_ref(),
        &user,
        service_id.into_inner(),
        &payload,
    )?;
    Ok(HttpResponse::Ok().json(service))
}

#[delete("/services/{id}")]
pub async fn delete_service(
    service_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    services::catalog::delete_service(repo.get_ref(), &user, service_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
