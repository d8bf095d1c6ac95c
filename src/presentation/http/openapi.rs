// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::content::list_articles,
        crate::presentation::http::controllers::content::latest_articles,
        crate::presentation::http::controllers::content::get_article,
        crate::presentation::http::controllers::reviews::list_reviews,
        crate::presentation::http::controllers::reviews::get_review,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::list_category_articles,
        crate::presentation::http::controllers::engagement::toggle_like,
        crate::presentation::http::controllers::engagement::add_comment,
        crate::presentation::http::controllers::dashboard::overview,
        crate::presentation::http::controllers::dashboard::create_article,
        crate::presentation::http::controllers::dashboard::update_article,
        crate::presentation::http::controllers::dashboard::delete_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::content::ListingParams,
            crate::presentation::http::controllers::engagement::AddCommentRequest,
            crate::presentation::http::controllers::dashboard::CreateArticleRequest,
            crate::presentation::http::controllers::dashboard::UpdateArticleRequest,
            crate::application::dto::ContentPageDto,
            crate::application::dto::ContentDto,
            crate::application::dto::ContentDetailDto,
            crate::application::dto::CommentDto,
            crate::application::dto::AuthorDto,
            crate::application::dto::EngagementDto,
            crate::application::dto::LikeStateDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::DashboardDto,
            crate::application::dto::PageLinksDto,
            crate::application::dto::PageLinkDto,
            crate::application::dto::NavControlDto,
            crate::application::dto::ShowingRangeDto
        )
    ),
    tags(
        (name = "Articles", description = "Public article listings and detail pages"),
        (name = "Reviews", description = "The FairReview collection"),
        (name = "Categories", description = "Category catalog and per-category listings"),
        (name = "Engagement", description = "Likes and comments"),
        (name = "Dashboard", description = "Admin publishing endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Lexpress API",
        description = "Content listing and publishing backend for a legal-commentary platform",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("session token".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

#[must_use]
pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let document = ApiDoc::openapi();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}
