use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::FlashMessage;

use crate::export::{ExportError, ExportFormat};
use crate::forms::filters::FilterForm;
use crate::models::config::ServerConfig;
use crate::repository::InMemoryDriverStore;
use crate::routes::{index_url, redirect};
use crate::services::{ServiceError, drivers as drivers_service};

#[get("/export/{format}")]
/// Download the filtered drivers as CSV or Excel.
pub async fn export_drivers(
    format: web::Path<ExportFormat>,
    params: web::Query<FilterForm>,
    repo: web::Data<InMemoryDriverStore>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let form = params.into_inner();

    match drivers_service::export_drivers(
        repo.get_ref(),
        &form,
        format.into_inner(),
        &server_config.export_file_name,
    ) {
        Ok(file) => HttpResponse::Ok()
            .content_type(file.content_type)
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ))
            .body(file.body),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().body(message),
        Err(ServiceError::Export(ExportError::Empty)) => {
            FlashMessage::warning("No drivers match the current filters, nothing to export.")
                .send();
            redirect(&index_url(&form.query_string()))
        }
        Err(err) => {
            log::error!("Failed to export drivers: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
