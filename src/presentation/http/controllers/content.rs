// src/presentation/http/controllers/content.rs
use crate::application::{
    dto::{ContentDetailDto, ContentDto, ContentPageDto},
    queries::content::{GetContentQuery, ListContentQuery},
};
use crate::domain::content::Collection;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeViewer;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Raw listing parameters. `page` stays a string so that malformed values
/// fall back to the first page instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListingParams {
    /// Case-insensitive substring; empty or absent matches everything.
    #[serde(default)]
    pub search: Option<String>,
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<String>,
}

impl ListingParams {
    pub(crate) fn into_query(self, collection: Collection) -> ListContentQuery {
        ListContentQuery {
            search: self.search,
            page: self.page,
            collection,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ListingParams),
    responses(
        (status = 200, description = "One page of articles, newest first.", body = ContentPageDto),
        (status = 503, description = "Content store unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListingParams>,
) -> HttpResult<Json<ContentPageDto>> {
    state
        .services
        .content_queries
        .list_content(params.into_query(Collection::General))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/latest",
    responses(
        (status = 200, description = "The newest articles across all categories.", body = [ContentDto])
    ),
    tag = "Articles"
)]
pub async fn latest_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ContentDto>>> {
    state
        .services
        .content_queries
        .latest_content()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article with comments and likes.", body = ContentDetailDto),
        (status = 401, description = "Invalid session token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
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
                review_only: false,
            },
        )
        .await
        .into_http()
        .map(Json)
}
