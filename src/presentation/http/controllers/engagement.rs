// src/presentation/http/controllers/engagement.rs
use crate::application::{
    commands::engagement::{AddCommentCommand, ToggleLikeCommand},
    dto::{CommentDto, LikeStateDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeViewer;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    pub body: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/likes",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Like toggled.", body = LikeStateDto),
        (status = 401, description = "Sign-in required.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Engagement"
)]
pub async fn toggle_like(
    Extension(state): Extension<HttpState>,
    viewer: MaybeViewer,
    Path(id): Path<i64>,
) -> HttpResult<Json<LikeStateDto>> {
    state
        .services
        .engagement_commands
        .toggle_like(viewer.viewer(), ToggleLikeCommand { content_id: id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article id")),
    request_body = AddCommentRequest,
    responses(
        (status = 201, description = "Comment added.", body = CommentDto),
        (status = 400, description = "Empty comment.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Sign-in required.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Engagement"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    viewer: MaybeViewer,
    Path(id): Path<i64>,
    Json(payload): Json<AddCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = AddCommentCommand {
        content_id: id,
        body: payload.body,
    };

    state
        .services
        .engagement_commands
        .add_comment(viewer.viewer(), command)
        .await
        .into_http()
        .map(|comment| (StatusCode::CREATED, Json(comment)))
}
