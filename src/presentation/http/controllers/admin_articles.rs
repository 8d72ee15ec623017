// src/presentation/http/controllers/admin_articles.rs
use crate::application::{
    commands::articles::DeleteArticleCommand,
    dto::ArticleDto,
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::admin::{
    crud::CrudController,
    field::PageName,
    page::{DetailPage, FormPage, IndexPage, IndexParams},
    url::CrudAction,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, PathParams, QueryParams};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct IndexQueryParams {
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<u32>,
    /// Search term matched against title and content.
    #[serde(default)]
    pub query: Option<String>,
    /// Index column to sort by, e.g. `createdAt`.
    #[serde(default)]
    pub sort: Option<String>,
    /// `asc` or `desc`.
    #[serde(default)]
    pub direction: Option<String>,
}

/// Body accepted by the create and edit forms. Only properties shown on the
/// form page are allowed.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ArticleFormRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[utoipa::path(
    get,
    path = "/admin/article",
    params(IndexQueryParams),
    responses(
        (status = 200, description = "Article list page.", body = IndexPage),
        (status = 400, description = "Invalid sort or paging options.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn index(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<IndexQueryParams>,
) -> HttpResult<Json<IndexPage>> {
    let admin = &state.admin;
    let renderer = admin.renderer(admin.articles());
    if let Some(sort) = params.sort.as_deref() {
        renderer.ensure_sortable(sort).into_http()?;
    }

    let page = params.page.unwrap_or(1).max(1);
    let result = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            page,
            page_size: admin.page_size(),
            search: params.query.clone(),
            sort: params.sort.clone(),
            direction: params.direction.clone(),
        })
        .await
        .into_http()?;

    let listing = IndexParams {
        search: params.query,
        sort: params.sort,
        direction: params.direction,
    };
    Ok(Json(renderer.index(result, &listing)))
}

#[utoipa::path(
    get,
    path = "/admin/article/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article detail page.", body = DetailPage),
        (status = 404, description = "Article not found.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn detail(
    Extension(state): Extension<HttpState>,
    PathParams(id): PathParams<i64>,
) -> HttpResult<Json<DetailPage>> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    let admin = &state.admin;
    Ok(Json(admin.renderer(admin.articles()).detail(&article)))
}

#[utoipa::path(
    get,
    path = "/admin/article/new",
    responses(
        (status = 200, description = "Empty article form.", body = FormPage)
    ),
    tag = "Articles"
)]
pub async fn new_form(Extension(state): Extension<HttpState>) -> Json<FormPage> {
    let admin = &state.admin;
    Json(admin.renderer(admin.articles()).new_form::<ArticleDto>())
}

#[utoipa::path(
    post,
    path = "/admin/article/new",
    request_body = ArticleFormRequest,
    responses(
        (status = 201, description = "Article created; Location points at its detail page.", body = DetailPage),
        (status = 400, description = "Invalid form submission.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<Value>,
) -> HttpResult<Response> {
    let admin = &state.admin;
    let controller = admin.articles();
    let renderer = admin.renderer(controller);

    let form = renderer.bind_form(PageName::New, payload).into_http()?;
    let command = controller.create_command(form).into_http()?;
    let created = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    let location = admin
        .urls()
        .set_controller(controller.route_segment())
        .set_action(CrudAction::Detail(created.id))
        .generate_url();
    let page = renderer.detail(&created);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(page)).into_response())
}

#[utoipa::path(
    get,
    path = "/admin/article/{id}/edit",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article form filled with current values.", body = FormPage),
        (status = 404, description = "Article not found.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn edit_form(
    Extension(state): Extension<HttpState>,
    PathParams(id): PathParams<i64>,
) -> HttpResult<Json<FormPage>> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    let admin = &state.admin;
    Ok(Json(admin.renderer(admin.articles()).edit_form(&article)))
}

#[utoipa::path(
    post,
    path = "/admin/article/{id}/edit",
    params(("id" = i64, Path, description = "Article id")),
    request_body = ArticleFormRequest,
    responses(
        (status = 200, description = "Article updated.", body = DetailPage),
        (status = 400, description = "Invalid form submission.", body = ErrorResponse),
        (status = 404, description = "Article not found.", body = ErrorResponse),
        (status = 409, description = "Article changed since it was read.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update(
    Extension(state): Extension<HttpState>,
    PathParams(id): PathParams<i64>,
    JsonBody(payload): JsonBody<Value>,
) -> HttpResult<Json<DetailPage>> {
    let admin = &state.admin;
    let controller = admin.articles();
    let renderer = admin.renderer(controller);

    let form = renderer.bind_form(PageName::Edit, payload).into_http()?;
    let updated = state
        .services
        .article_commands
        .update_article(controller.update_command(id, form))
        .await
        .into_http()?;

    Ok(Json(renderer.detail(&updated)))
}

#[utoipa::path(
    post,
    path = "/admin/article/{id}/delete",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 303, description = "Article deleted; redirect to the list page."),
        (status = 404, description = "Article not found.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete(
    Extension(state): Extension<HttpState>,
    PathParams(id): PathParams<i64>,
) -> HttpResult<Redirect> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    let admin = &state.admin;
    let index_url = admin
        .urls()
        .set_controller(admin.articles().route_segment())
        .generate_url();
    Ok(Redirect::to(&index_url))
}
