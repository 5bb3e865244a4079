use actix_web::{HttpResponse, Responder, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::auth::AuthenticatedUser;
use crate::domain::course::Course;
use crate::domain::types::{CourseId, CourseStatus, SubcategoryId, UserId};
use crate::forms::courses::{CourseListingParams, CreateCourseForm, CreateCourseFormPayload};
use crate::repository::DieselRepository;
use crate::routes::{ApiResponse, service_error_response};
use crate::services::courses::{
    courses_by_subcategory as courses_by_subcategory_service,
    create_course as create_course_service, get_course_by_slug as get_course_by_slug_service,
    list_instructor_courses as list_instructor_courses_service,
    list_public_courses as list_public_courses_service, popular_courses as popular_courses_service,
    publish_course as publish_course_service,
};

/// Compact acknowledgement returned after a course mutation.
#[derive(Debug, Serialize)]
pub struct CourseAck {
    pub id: CourseId,
    pub slug: String,
    pub title: String,
    pub status: CourseStatus,
}

impl From<Course> for CourseAck {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            slug: course.slug.into_inner(),
            title: course.title.into_inner(),
            status: course.status,
        }
    }
}

#[get("/v1/courses")]
pub async fn list_courses(
    params: web::Query<CourseListingParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let page = list_public_courses_service(params.into_inner(), repo.get_ref());
    HttpResponse::Ok().json(ApiResponse::ok(page))
}

#[derive(Debug, Deserialize)]
struct PopularQueryParams {
    limit: Option<usize>,
}

#[get("/v1/courses/popular")]
pub async fn popular_courses(
    params: web::Query<PopularQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let limit = params.limit.unwrap_or(8);
    let courses = popular_courses_service(limit, repo.get_ref());
    HttpResponse::Ok().json(ApiResponse::ok(courses))
}

#[derive(Debug, Deserialize)]
struct SubcategoryQueryParams {
    subcategory: i32,
    limit: Option<usize>,
}

#[get("/v1/courses/by-subcategory")]
pub async fn courses_by_subcategory(
    params: web::Query<SubcategoryQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let subcategory_id = match SubcategoryId::new(params.subcategory) {
        Ok(id) => id,
        Err(e) => return HttpResponse::BadRequest().json(ApiResponse::err(e.to_string())),
    };
    let limit = params.limit.unwrap_or(4);
    let courses = courses_by_subcategory_service(subcategory_id, limit, repo.get_ref());
    HttpResponse::Ok().json(ApiResponse::ok(courses))
}

#[derive(Debug, Deserialize)]
struct InstructorQueryParams {
    page: Option<usize>,
    instructor: Option<i32>,
}

#[get("/v1/courses/mine")]
pub async fn my_courses(
    params: web::Query<InstructorQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let instructor = params.instructor.and_then(|id| UserId::new(id).ok());
    let page = params.page.unwrap_or(1);

    match list_instructor_courses_service(instructor, page, &user, repo.get_ref()) {
        Ok(courses) => HttpResponse::Ok().json(ApiResponse::ok(courses)),
        Err(err) => service_error_response(err),
    }
}

#[get("/v1/courses/{slug}")]
pub async fn course_detail(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_course_by_slug_service(&slug, repo.get_ref()) {
        Some(course) => HttpResponse::Ok().json(ApiResponse::ok(course)),
        None => HttpResponse::NotFound().json(ApiResponse::err("Curso no encontrado")),
    }
}

#[post("/v1/courses")]
pub async fn create_course(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateCourseForm>,
) -> impl Responder {
    let payload: CreateCourseFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(ApiResponse::err(e.to_string())),
    };

    match create_course_service(payload, &user, repo.get_ref()) {
        Ok(course) => HttpResponse::Created().json(ApiResponse::ok(CourseAck::from(course))),
        Err(err) => service_error_response(err),
    }
}

#[post("/v1/courses/{course_id}/publish")]
pub async fn publish_course(
    course_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match publish_course_service(course_id.into_inner(), &user, repo.get_ref()) {
        Ok(course) => HttpResponse::Ok().json(ApiResponse::ok(CourseAck::from(course))),
        Err(err) => service_error_response(err),
    }
}
