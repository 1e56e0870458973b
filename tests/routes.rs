use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use driver_roster::repository::{DriverReader, InMemoryDriverStore};
use driver_roster::routes;
use driver_roster::sources::{DataSource, FixtureSource};
use serde_json::Value;

mod common;

macro_rules! init_app {
    ($store:expr, $source:expr) => {
        test::init_service(
            App::new()
                .wrap(common::flash_framework())
                .configure(routes::configure)
                .app_data(web::Data::new(common::tera()))
                .app_data(web::Data::new($store))
                .app_data(web::Data::new($source))
                .app_data(web::Data::new(common::test_config())),
        )
        .await
    };
}

async fn loaded_store() -> InMemoryDriverStore {
    common::store_with(common::fixture_drivers().await)
}

#[actix_web::test]
async fn index_renders_first_page() {
    let app = init_app!(loaded_store().await, common::fixture_source());

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("john.doe@example.com"));
    // Five rows per page in the test config.
    assert!(!html.contains("sarah.wilson@example.com"));
    assert!(html.contains("12 driver(s)"));
    assert!(html.contains("Name Search"));
    assert!(html.contains("/export/pdf"));
}

#[actix_web::test]
async fn index_applies_filters() {
    let app = init_app!(loaded_store().await, common::fixture_source());

    let req = test::TestRequest::get()
        .uri("/?search=JANE&status=Inactive")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("jane.smith@example.com"));
    assert!(!html.contains("john.doe@example.com"));
    assert!(html.contains("1 driver(s) matching 2 filter(s)"));
}

#[actix_web::test]
async fn index_second_page() {
    let app = init_app!(loaded_store().await, common::fixture_source());

    let req = test::TestRequest::get().uri("/?page=2").to_request();
    let resp = test::call_service(&app, req).await;

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("sarah.wilson@example.com"));
    assert!(!html.contains("john.doe@example.com"));
}

#[actix_web::test]
async fn index_with_invalid_date_redirects_home() {
    let app = init_app!(loaded_store().await, common::fixture_source());

    let req = test::TestRequest::get()
        .uri("/?start_date=yesterday&end_date=2023-01-01")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
}

#[actix_web::test]
async fn index_with_malformed_page_redirects_home() {
    let app = init_app!(loaded_store().await, common::fixture_source());

    let req = test::TestRequest::get().uri("/?page=abc").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
}

#[actix_web::test]
async fn index_shows_load_failure() {
    let store = InMemoryDriverStore::new();
    {
        use driver_roster::repository::DriverWriter;
        let ticket = store.begin_load().unwrap();
        store
            .complete_load(ticket, Err("Failed to load driver data.".into()))
            .unwrap();
    }
    let app = init_app!(store, common::fixture_source());

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("Failed to load driver data."));
    assert!(html.contains("No records to display"));
}

#[actix_web::test]
async fn api_filters_by_inclusive_date_range() {
    let app = init_app!(loaded_store().await, common::fixture_source());

    let req = test::TestRequest::get()
        .uri("/api/v1/drivers?start_date=2023-01-01&end_date=2023-01-31")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 2);
    let ids: Vec<_> = body["drivers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["1", "4"]);
    assert!(body["error"].is_null());
}

#[actix_web::test]
async fn api_rejects_invalid_parameters() {
    let app = init_app!(loaded_store().await, common::fixture_source());

    let req = test::TestRequest::get()
        .uri("/api/v1/drivers?end_date=31.01.2023")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("end_date"));
}

#[actix_web::test]
async fn export_csv_downloads_filtered_rows() {
    let app = init_app!(loaded_store().await, common::fixture_source());

    let req = test::TestRequest::get()
        .uri("/export/csv?status=Inactive")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"drivers.csv\""
    );
    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.starts_with("\"id\",\"firstName\",\"lastName\""));
    // Header plus four inactive drivers.
    assert_eq!(text.matches("\r\n").count(), 5);
}

#[actix_web::test]
async fn export_xlsx_downloads_workbook() {
    let app = init_app!(loaded_store().await, common::fixture_source());

    let req = test::TestRequest::get().uri("/export/xlsx").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"drivers.xlsx\""
    );
    let body = test::read_body(resp).await;
    assert_eq!(&body[..2], b"PK");
}

#[actix_web::test]
async fn export_pdf_downloads_document() {
    let app = init_app!(loaded_store().await, common::fixture_source());

    let req = test::TestRequest::get()
        .uri("/export/pdf?status=Active")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    assert_eq!(
        resp.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"drivers.pdf\""
    );
    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"%PDF"));
}

#[actix_web::test]
async fn export_of_empty_result_redirects_back() {
    let app = init_app!(loaded_store().await, common::fixture_source());

    let req = test::TestRequest::get()
        .uri("/export/csv?search=nobody")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/?search=nobody"
    );
}

#[actix_web::test]
async fn export_unknown_format_is_not_found() {
    let app = init_app!(loaded_store().await, common::fixture_source());

    let req = test::TestRequest::get().uri("/export/docx").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn reload_loads_fixture() {
    let store = InMemoryDriverStore::new();
    let app = init_app!(store.clone(), common::fixture_source());

    let req = test::TestRequest::post().uri("/reload").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    assert_eq!(store.list_drivers().unwrap().len(), 12);
}

#[actix_web::test]
async fn reload_failure_clears_table() {
    let store = loaded_store().await;
    let broken = DataSource::Fixture(FixtureSource::new("/missing/drivers.json"));
    let app = init_app!(store.clone(), broken);

    let req = test::TestRequest::post().uri("/reload").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(store.list_drivers().unwrap().is_empty());
    assert_eq!(
        store.load_state().unwrap().error(),
        Some("Failed to load driver data.")
    );
}
