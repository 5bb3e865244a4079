use actix_web::{HttpResponse, Responder, get, post, web};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::users::{CreateProfessorForm, CreateProfessorFormPayload};
use crate::repository::DieselRepository;
use crate::routes::{ApiResponse, service_error_response};
use crate::services::users::{
    create_professor as create_professor_service, current_profile as current_profile_service,
    mark_email_verified as mark_email_verified_service, register_student as register_service,
};

#[get("/v1/profile")]
pub async fn current_profile(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match current_profile_service(&user, repo.get_ref()) {
        Ok(profile) => HttpResponse::Ok().json(ApiResponse::ok(profile)),
        Err(err) => service_error_response(err),
    }
}

/// Provision a local profile for a freshly signed-in identity.
#[post("/v1/profile/register")]
pub async fn register_profile(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match register_service(&user, repo.get_ref()) {
        Ok(profile) => HttpResponse::Ok().json(ApiResponse::ok(profile)),
        Err(err) => service_error_response(err),
    }
}

#[post("/v1/profile/verify-email")]
pub async fn verify_email(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match mark_email_verified_service(&user, repo.get_ref()) {
        Ok(verified) => HttpResponse::Ok().json(ApiResponse::ok(verified)),
        Err(err) => service_error_response(err),
    }
}

#[post("/v1/professors")]
pub async fn create_professor(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateProfessorForm>,
) -> impl Responder {
    let payload: CreateProfessorFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(ApiResponse::err(e.to_string())),
    };

    match create_professor_service(payload, &user, repo.get_ref()) {
        Ok(professor) => HttpResponse::Created().json(ApiResponse::ok(professor)),
        Err(err) => service_error_response(err),
    }
}
