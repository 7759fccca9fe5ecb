//! Health endpoint integration test

mod common;

use axum::http::StatusCode;

use common::spawn_app;

#[tokio::test]
async fn health_reports_database_status() {
    let app = spawn_app().await;

    let (status, body) = app.request("GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
