// src/presentation/http/routes.rs
use crate::presentation::admin::article::ARTICLE_ROUTE_SEGMENT;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin_articles, admin_dashboard},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub const HEALTH_PATH: &str = "/health";

/// Build the application router. Admin routes are mounted below the
/// configured dashboard path.
pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let dashboard = state.admin.urls().dashboard_url();
    let prefix = state.admin.urls().prefix().to_string();
    let article = format!("{prefix}/{ARTICLE_ROUTE_SEGMENT}");

    Router::new()
        .merge(openapi::docs_router(&prefix))
        .route(HEALTH_PATH, get(health))
        .route(&dashboard, get(admin_dashboard::dashboard_index))
        .route(
            &format!("{prefix}/dashboard"),
            get(admin_dashboard::dashboard_page),
        )
        .route(&article, get(admin_articles::index))
        .route(
            &format!("{article}/new"),
            get(admin_articles::new_form).post(admin_articles::create),
        )
        .route(&format!("{article}/{{id}}"), get(admin_articles::detail))
        .route(
            &format!("{article}/{{id}}/edit"),
            get(admin_articles::edit_form).post(admin_articles::update),
        )
        .route(
            &format!("{article}/{{id}}/delete"),
            post(admin_articles::delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
