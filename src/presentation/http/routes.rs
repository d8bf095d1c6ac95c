// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{categories, content, dashboard, engagement, reviews},
    middleware::require_admin,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

#[must_use]
pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|_| tracing::warn!(%origin, "ignoring invalid CORS origin"))
                .ok()
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let dashboard = Router::new()
        .route("/api/v1/dashboard", get(dashboard::overview))
        .route("/api/v1/dashboard/articles", post(dashboard::create_article))
        .route(
            "/api/v1/dashboard/articles/{id}",
            put(dashboard::update_article).delete(dashboard::delete_article),
        )
        .route_layer(middleware::from_fn(require_admin));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/articles", get(content::list_articles))
        .route("/api/v1/articles/latest", get(content::latest_articles))
        .route("/api/v1/articles/{id}", get(content::get_article))
        .route("/api/v1/articles/{id}/likes", post(engagement::toggle_like))
        .route("/api/v1/articles/{id}/comments", post(engagement::add_comment))
        .route("/api/v1/reviews", get(reviews::list_reviews))
        .route("/api/v1/reviews/{id}", get(reviews::get_review))
        .route("/api/v1/categories", get(categories::list_categories))
        .route(
            "/api/v1/categories/{slug}/articles",
            get(categories::list_category_articles),
        )
        .merge(dashboard)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
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
