// src/presentation/http/openapi.rs
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path, sync::Arc};
use utoipa::{OpenApi, ToSchema};

pub const OPENAPI_JSON_PATH: &str = "/openapi.json";
pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::admin_dashboard::dashboard_index,
        crate::presentation::http::controllers::admin_dashboard::dashboard_page,
        crate::presentation::http::controllers::admin_articles::index,
        crate::presentation::http::controllers::admin_articles::detail,
        crate::presentation::http::controllers::admin_articles::new_form,
        crate::presentation::http::controllers::admin_articles::create,
        crate::presentation::http::controllers::admin_articles::edit_form,
        crate::presentation::http::controllers::admin_articles::update,
        crate::presentation::http::controllers::admin_articles::delete,
        crate::presentation::http::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::admin_articles::ArticleFormRequest,
            crate::presentation::admin::field::PageName,
            crate::presentation::admin::field::FieldKind,
            crate::presentation::admin::page::DashboardPage,
            crate::presentation::admin::page::IndexPage,
            crate::presentation::admin::page::DetailPage,
            crate::presentation::admin::page::FormPage,
            crate::application::dto::ArticleDto
        )
    ),
    tags(
        (name = "Dashboard", description = "Admin dashboard and navigation"),
        (name = "Articles", description = "Article CRUD pages"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Admin Panel API",
        description = "Headless admin backend for articles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Admin prefix the handler annotations are written against.
pub const DOCUMENTED_ADMIN_PREFIX: &str = "/admin";

/// The document with admin paths moved below `prefix`.
pub fn openapi_for_prefix(prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if prefix == DOCUMENTED_ADMIN_PREFIX {
        return doc;
    }
    doc.paths.paths = std::mem::take(&mut doc.paths.paths)
        .into_iter()
        .map(|(path, item)| (rebase_admin_path(&path, prefix), item))
        .collect();
    doc
}

fn rebase_admin_path(path: &str, prefix: &str) -> String {
    if path == DOCUMENTED_ADMIN_PREFIX {
        return prefix.to_string();
    }
    match path
        .strip_prefix(DOCUMENTED_ADMIN_PREFIX)
        .and_then(|rest| rest.strip_prefix('/'))
    {
        Some(rest) => format!("{prefix}/{rest}"),
        None => path.to_string(),
    }
}

/// Serves `/openapi.json` for an admin mounted at `prefix`.
pub fn docs_router(prefix: &str) -> Router {
    let doc = Arc::new(openapi_for_prefix(prefix));
    Router::new().route(
        OPENAPI_JSON_PATH,
        get(move || {
            let doc = Arc::clone(&doc);
            async move { Json(doc.as_ref().clone()) }
        }),
    )
}

/// Write the OpenAPI document to `OPENAPI_SNAPSHOT_PATH` and return the path
/// that was written.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_admin_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/admin",
            "/admin/article",
            "/admin/article/new",
            "/admin/article/{id}",
            "/admin/article/{id}/edit",
            "/admin/article/{id}/delete",
            "/health",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn admin_paths_follow_the_mount_prefix() {
        let doc = openapi_for_prefix("/backoffice");
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        assert!(paths.contains(&"/backoffice"));
        assert!(paths.contains(&"/backoffice/article/{id}/edit"));
        assert!(paths.contains(&"/health"));
        assert!(!paths.iter().any(|p| p.starts_with("/admin")), "{paths:?}");
    }

    #[test]
    fn rebasing_only_touches_admin_paths() {
        assert_eq!(rebase_admin_path("/admin", "/bo"), "/bo");
        assert_eq!(rebase_admin_path("/admin/article", "/bo"), "/bo/article");
        assert_eq!(rebase_admin_path("/administrator", "/bo"), "/administrator");
        assert_eq!(rebase_admin_path("/health", "/bo"), "/health");
    }

    #[test]
    fn document_declares_page_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components").schemas;
        assert!(schemas.contains_key("IndexPage"));
        assert!(schemas.contains_key("FormPage"));
        assert!(schemas.contains_key("ErrorResponse"));
    }
}
