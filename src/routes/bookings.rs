use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::dto::bookings::{CreateBookingPayload, UpdateBookingPayload};
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::ApiError;
use crate::services;

#[get("/bookings")]
pub async fn list_bookings(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let views = services::bookings::list_bookings(repo.get_ref(), &user)?;
    Ok(HttpResponse::Ok().json(views))
}

#[get("/bookings/{id}")]
pub async fn get_booking(
    booking_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let view = services::bookings::get_booking(repo.get_ref(), &user, booking_id.into_inner())?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/bookings")]
pub async fn create_booking(
    user: AuthenticatedUser,
    payload: web::Json<CreateBookingPayload>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let view = services::bookings::create_booking(repo.get_ref(), &user, &payload)?;
    Ok(HttpResponse::Created().json(view))
}

#[put("/bookings/{id}")]
pub async fn update_booking(
    booking_id: web::Path<i32>,
    user: AuthenticatedUser,
    payload: web::Json<UpdateBookingPayload>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let view = services::bookings::update_booking(
        repo.get_ref(),
        &user,
        booking_id.into_inner(),
        &payload,
    )?;
    Ok(HttpResponse::Ok().json(view))
}

#[delete("/bookings/{id}")]
pub async fn delete_booking(
    booking_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    services::bookings::delete_booking(repo.get_ref(), &user, booking_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
