#![allow(dead_code)]

use actix_web::cookie::Key;
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use driver_roster::domain::driver::Driver;
use driver_roster::models::config::ServerConfig;
use driver_roster::repository::{DriverWriter, InMemoryDriverStore};
use driver_roster::sources::{DataSource, DriverSource, FixtureSource};
use tera::Tera;

pub const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/drivers.json");

pub fn test_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".into(),
        port: 0,
        templates_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*").into(),
        assets_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/assets").into(),
        secret: "x".repeat(64),
        use_mock_data: true,
        api_base_url: "http://127.0.0.1:9".into(),
        fixture_path: FIXTURE.into(),
        request_timeout_secs: 1,
        items_per_page: 5,
        export_file_name: "drivers".into(),
    }
}

pub fn tera() -> Tera {
    Tera::new(&test_config().templates_dir).expect("templates should parse")
}

pub fn flash_framework() -> FlashMessagesFramework {
    let store = CookieMessageStore::builder(Key::generate()).build();
    FlashMessagesFramework::builder(store).build()
}

pub fn fixture_source() -> DataSource {
    DataSource::Fixture(FixtureSource::new(FIXTURE))
}

pub async fn fixture_drivers() -> Vec<Driver> {
    FixtureSource::new(FIXTURE)
        .load()
        .await
        .expect("bundled fixture should load")
}

pub fn store_with(drivers: Vec<Driver>) -> InMemoryDriverStore {
    let store = InMemoryDriverStore::new();
    let ticket = store.begin_load().unwrap();
    store.complete_load(ticket, Ok(drivers)).unwrap();
    store
}
