// src/presentation/http/controllers/admin_dashboard.rs
use crate::presentation::admin::{dashboard::DashboardResponse, page::DashboardPage};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// Dashboard root. Redirects to the article list unless the panel is
/// configured to land on the dashboard page.
#[utoipa::path(
    get,
    path = "/admin",
    responses(
        (status = 302, description = "Redirect to the article list page."),
        (status = 200, description = "Dashboard page, when redirecting is disabled.", body = DashboardPage)
    ),
    tag = "Dashboard"
)]
pub async fn dashboard_index(Extension(state): Extension<HttpState>) -> Response {
    let admin = &state.admin;
    match admin.dashboard().index(admin.urls()) {
        DashboardResponse::Redirect(target) => {
            (StatusCode::FOUND, [(header::LOCATION, target)]).into_response()
        }
        DashboardResponse::Render(page) => Json(page).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/admin/dashboard",
    responses(
        (status = 200, description = "Dashboard title and menu.", body = DashboardPage)
    ),
    tag = "Dashboard"
)]
pub async fn dashboard_page(Extension(state): Extension<HttpState>) -> Json<DashboardPage> {
    let admin = &state.admin;
    Json(admin.dashboard().render(admin.urls()))
}
