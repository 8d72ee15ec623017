// tests/support/helpers.rs
use super::mocks::{InMemoryArticleRepo, SteppingClock};
use admin_panel::application::{ports::time::Clock, services::ApplicationServices};
use admin_panel::config::AdminSettings;
use admin_panel::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use admin_panel::presentation::admin::AdminContext;
use admin_panel::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;

/// テスト用のルーターとリポジトリ
pub struct TestApp {
    pub router: axum::Router,
    pub repo: Arc<InMemoryArticleRepo>,
}

pub fn build_test_state(settings: &AdminSettings) -> (HttpState, Arc<InMemoryArticleRepo>) {
    let repo = Arc::new(InMemoryArticleRepo::default());
    let write: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read: Arc<dyn ArticleReadRepository> = repo.clone();
    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::default());

    let services = Arc::new(ApplicationServices::new(write, read, clock));
    let admin = Arc::new(AdminContext::new(settings));
    (HttpState { services, admin }, repo)
}

pub fn make_test_app_with(settings: AdminSettings) -> TestApp {
    let (state, repo) = build_test_state(&settings);
    let router = build_router(state, &["http://localhost:3000".to_string()]);
    TestApp { router, repo }
}

pub fn make_test_app() -> TestApp {
    make_test_app_with(AdminSettings::default())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected JSON body")
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("missing Location header")
}

/// エラーレスポンスが `ErrorResponse` 形式であることを確認する
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    assert_eq!(json["error"], expected_error, "unexpected error body: {json}");
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message field in ErrorResponse"
    );
    json
}

pub fn post_raw(uri: &str, content_type: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}
