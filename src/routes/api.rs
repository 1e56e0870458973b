use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::forms::filters::FilterForm;
use crate::models::config::ServerConfig;
use crate::repository::InMemoryDriverStore;
use crate::services::{ServiceError, drivers as drivers_service};

#[get("/v1/drivers")]
/// Filtered drivers as JSON.
pub async fn api_v1_drivers(
    params: web::Query<FilterForm>,
    repo: web::Data<InMemoryDriverStore>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match drivers_service::list_drivers(
        repo.get_ref(),
        params.into_inner(),
        server_config.items_per_page,
    ) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(err) => {
            log::error!("Failed to list drivers: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
