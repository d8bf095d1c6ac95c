// src/presentation/http/controllers/dashboard.rs
//! Admin-only routes. The `require_admin` middleware has already resolved
//! the viewer by the time these handlers run.
use crate::application::{
    commands::content::{CreateContentCommand, DeleteContentCommand, UpdateContentCommand},
    dto::{ContentDto, DashboardDto},
    ports::identity::Viewer,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub category: String,
    pub body: String,
    #[serde(default)]
    pub cover_image: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub body: Option<String>,
    pub cover_image: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses(
        (status = 200, description = "The admin's articles and engagement totals.", body = DashboardDto),
        (status = 401, description = "Sign-in required.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Admin role required.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Dashboard"
)]
pub async fn overview(
    Extension(state): Extension<HttpState>,
    Extension(viewer): Extension<Viewer>,
) -> HttpResult<Json<DashboardDto>> {
    state
        .services
        .dashboard_queries
        .overview(Some(&viewer))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/dashboard/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article published.", body = ContentDto),
        (status = 400, description = "Invalid submission.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Admin role required.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Dashboard"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Extension(viewer): Extension<Viewer>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ContentDto>)> {
    let command = CreateContentCommand {
        title: payload.title,
        category: payload.category,
        body: payload.body,
        cover_image: payload.cover_image,
    };

    state
        .services
        .content_commands
        .create_content(Some(&viewer), command)
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/api/v1/dashboard/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ContentDto),
        (status = 403, description = "Not the article's author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Dashboard"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Extension(viewer): Extension<Viewer>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ContentDto>> {
    let command = UpdateContentCommand {
        id,
        title: payload.title,
        category: payload.category,
        body: payload.body,
        cover_image: payload.cover_image,
    };

    state
        .services
        .content_commands
        .update_content(Some(&viewer), command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/dashboard/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article deleted with its comments and likes."),
        (status = 403, description = "Not the article's author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Dashboard"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Extension(viewer): Extension<Viewer>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .content_commands
        .delete_content(Some(&viewer), DeleteContentCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
