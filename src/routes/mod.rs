use actix_web::HttpResponse;
use serde::Serialize;

use crate::services::ServiceError;

pub mod categories;
pub mod courses;
pub mod users;

/// Uniform JSON envelope wrapping every API response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Map a service failure to its HTTP status, wrapped in the envelope.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(ApiResponse::err("No autorizado"))
        }
        ServiceError::NotFound => HttpResponse::NotFound().json(ApiResponse::err("No encontrado")),
        ServiceError::Form(message) => HttpResponse::BadRequest().json(ApiResponse::err(message)),
        ServiceError::Conflict(message) => {
            HttpResponse::Conflict().json(ApiResponse::err(message))
        }
        ServiceError::Internal => {
            HttpResponse::InternalServerError().json(ApiResponse::err("Error interno"))
        }
    }
}
