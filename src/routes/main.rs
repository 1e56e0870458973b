use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::filters::FilterForm;
use crate::models::config::ServerConfig;
use crate::repository::InMemoryDriverStore;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, drivers as drivers_service, loader as loader_service};
use crate::sources::DataSource;

#[get("/")]
/// Show the filter panel and the filtered driver table.
pub async fn show_index(
    params: Result<web::Query<FilterForm>, actix_web::Error>,
    repo: web::Data<InMemoryDriverStore>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    // Malformed values such as `page=abc` are reported like invalid filters.
    let params = match params {
        Ok(params) => params,
        Err(err) => {
            log::warn!("Rejected index query: {err}");
            FlashMessage::error(format!("Invalid filter: {err}")).send();
            return redirect("/");
        }
    };

    match drivers_service::load_index_page(
        repo.get_ref(),
        params.into_inner(),
        server_config.items_per_page,
    ) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "index");
            context.insert("drivers", &data.drivers);
            context.insert("total", &data.total);
            context.insert("active_filters", &data.active_filters);
            context.insert("definitions", data.definitions);
            context.insert("values", &data.filter_values);
            context.insert("query", &data.query);
            context.insert("load_state", &data.load_state);
            context.insert("load_error", &data.load_state.error());

            render_template(&tera, "main/index.html", &context)
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to load index page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/reload")]
/// Reload the driver collection from the configured source.
pub async fn reload_drivers(
    repo: web::Data<InMemoryDriverStore>,
    source: web::Data<DataSource>,
) -> impl Responder {
    match loader_service::reload_drivers(source.get_ref(), repo.get_ref()).await {
        Ok(outcome) => {
            match outcome.error {
                Some(message) => FlashMessage::error(message).send(),
                None if outcome.applied => {
                    FlashMessage::success(format!("Loaded {} drivers.", outcome.loaded)).send()
                }
                None => FlashMessage::info("A newer reload replaced this one.").send(),
            }
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to reload drivers: {err}");
            FlashMessage::error("Failed to reload drivers.").send();
            redirect("/")
        }
    }
}
