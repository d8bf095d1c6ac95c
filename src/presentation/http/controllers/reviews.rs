// src/presentation/http/controllers/reviews.rs
use super::content::ListingParams;
use crate::application::{
    dto::{ContentDetailDto, ContentPageDto},
    queries::content::GetContentQuery,
};
use crate::domain::content::Collection;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeViewer;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};

#[utoipa::path(
    get,
    path = "/api/v1/reviews",
    params(ListingParams),
    responses(
        (status = 200, description = "One page of reviews with like and comment totals.", body = ContentPageDto),
        (status = 503, description = "Content store unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Reviews"
)]
pub async fn list_reviews(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListingParams>,
) -> HttpResult<Json<ContentPageDto>> {
    state
        .services
        .content_queries
        .list_content(params.into_query(Collection::Review))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/reviews/{id}",
    params(("id" = i64, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review with comments and likes.", body = ContentDetailDto),
        (status = 404, description = "No review with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Reviews"
)]
pub async fn get_review(
    Extension(state): Extension<HttpState>,
    viewer: MaybeViewer,
    Path(id): Path<i64>,
) -> HttpResult<Json<ContentDetailDto>> {
    state
        .services
        .content_queries
        .get_content(
            viewer.viewer(),
            GetContentQuery {
                id,
                review_only: true,
            },
        )
        .await
        .into_http()
        .map(Json)
}
