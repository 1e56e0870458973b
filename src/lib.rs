pub mod domain;
pub mod repository;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod export;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod pagination;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod sources;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_files::Files;
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::models::config::ServerConfig;
    use crate::repository::InMemoryDriverStore;
    use crate::routes;
    use crate::services::loader::reload_drivers;
    use crate::sources::DataSource;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let source = DataSource::from_config(&server_config).map_err(|e| {
            std::io::Error::other(format!("Failed to configure data source: {e}"))
        })?;

        let store = InMemoryDriverStore::new();

        // Initial load before serving; failures leave an empty table with a message.
        reload_drivers(&source, &store)
            .await
            .map_err(|e| std::io::Error::other(format!("Failed to load drivers: {e}")))?;

        let secret_key = Key::try_from(server_config.secret.as_bytes())
            .map_err(|e| std::io::Error::other(format!("Invalid secret key: {e}")))?;

        let message_store = CookieMessageStore::builder(secret_key).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let source = web::Data::new(source);
        let bind_address = (server_config.address.clone(), server_config.port);

        log::info!(
            "Serving drivers from {} on {}:{}",
            if server_config.use_mock_data {
                server_config.fixture_path.as_str()
            } else {
                server_config.api_base_url.as_str()
            },
            server_config.address,
            server_config.port
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(message_framework.clone())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", &server_config.assets_dir))
                .configure(routes::configure)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(store.clone()))
                .app_data(source.clone())
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
