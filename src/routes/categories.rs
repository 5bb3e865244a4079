use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::routes::ApiResponse;
use crate::services::categories::category_tree as category_tree_service;

#[get("/v1/categories")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    let tree = category_tree_service(repo.get_ref());
    HttpResponse::Ok().json(ApiResponse::ok(tree))
}
