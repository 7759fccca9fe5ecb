//! Shared test harness: an app wired to a throwaway SQLite database,
//! driven through `tower::ServiceExt::oneshot`.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use staff_server::{Config, ServerState, build_app};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub app: Router,
    // Keeps the database directory alive for the test's duration.
    _dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with(configure: impl FnOnce(&mut Config)) -> TestApp {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let mut config = Config::with_overrides(db_path.to_string_lossy(), 0);
    configure(&mut config);

    let state = ServerState::initialize(&config)
        .await
        .expect("failed to initialize server state");
    TestApp {
        app: build_app(state),
        _dir: dir,
    }
}

impl TestApp {
    /// Fire one request; returns status and parsed JSON body
    /// (`Value::Null` for empty bodies).
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        self.request_with_headers(method, uri, body, &[]).await
    }

    pub async fn request_with_headers(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("failed to build request"),
            None => builder.body(Body::empty()).expect("failed to build request"),
        };

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to read body")
            .to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body is not valid JSON")
        };
        (status, json)
    }

    /// Seed one department and return its JSON representation.
    pub async fn create_department(&self, name: &str, create_date: &str) -> Value {
        let (status, body) = self
            .request(
                "POST",
                "/departments",
                Some(serde_json::json!({ "name": name, "create_date": create_date })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "seed department failed: {body}");
        body
    }
}
