// src/presentation/http/controllers/categories.rs
use super::content::ListingParams;
use crate::application::{
    dto::{CategoryDto, ContentPageDto},
    queries::categories::ListCategoryContentQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "Category catalog with article counts.", body = [CategoryDto])
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .catalog()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{slug}/articles",
    params(
        ("slug" = String, Path, description = "Category slug, e.g. `landmark-cases`"),
        ListingParams
    ),
    responses(
        (status = 200, description = "One page of the category's articles.", body = ContentPageDto),
        (status = 404, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn list_category_articles(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<ListingParams>,
) -> HttpResult<Json<ContentPageDto>> {
    state
        .services
        .category_queries
        .list_category(ListCategoryContentQuery {
            slug,
            search: params.search,
            page: params.page,
        })
        .await
        .into_http()
        .map(Json)
}
