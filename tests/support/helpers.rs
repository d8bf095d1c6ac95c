// tests/support/helpers.rs
use super::builders::ArticleSeed;
use super::mocks::{FixedClock, InMemoryStore, StaticViewerProvider};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use lexpress_core::application::ports::time::Clock;
use lexpress_core::application::services::ApplicationServices;
use lexpress_core::domain::content::{Category, ContentId, ContentReadRepository};
use lexpress_core::domain::user::UserId;
use lexpress_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub fn build_services(store: &InMemoryStore) -> Arc<ApplicationServices> {
    build_services_with_read_repo(store, Arc::new(store.clone()))
}

/// Services over `store`, except that reads go through `read_repo`.
pub fn build_services_with_read_repo(
    store: &InMemoryStore,
    read_repo: Arc<dyn ContentReadRepository>,
) -> Arc<ApplicationServices> {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    Arc::new(ApplicationServices::new(
        Arc::new(store.clone()),
        read_repo,
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(StaticViewerProvider),
        clock,
    ))
}

pub fn router_for(services: Arc<ApplicationServices>) -> axum::Router {
    let origins = vec!["http://localhost:3000".to_string()];
    build_router(HttpState { services }, &origins)
}

pub fn make_test_router(store: &InMemoryStore) -> axum::Router {
    router_for(build_services(store))
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    json: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    match json {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

pub struct AdrScenario {
    pub author: UserId,
    /// ADR ids, newest first.
    pub adr_ids: Vec<ContentId>,
}

/// Ten articles matching "ADR" (even ranks by title, odd ranks by category
/// name) plus four unrelated ones interleaved by time. `adr_ids[0]` is the
/// newest match.
pub fn seed_adr_scenario(store: &InMemoryStore) -> AdrScenario {
    let author = store.seed_user("user_admin", "Asha Rao");

    let mut adr_ids = Vec::new();
    for rank in 1..=10 {
        let seed = if rank % 2 == 0 {
            ArticleSeed::new(format!("ADR note {rank}")).category(Category::Civil)
        } else {
            // matches through the category name only
            ArticleSeed::new(format!("Mediation note {rank}")).category(Category::Adr)
        };
        adr_ids.push(store.seed_article(author, seed.minutes_ago(rank * 10)));
    }

    let titles = ["Bail reform", "Land titling", "Custody rules", "Privacy ruling"];
    for (offset, title) in (0_i64..).zip(titles) {
        let seed = ArticleSeed::new(title)
            .category(Category::Criminal)
            .minutes_ago(offset * 25 + 5);
        store.seed_article(author, seed);
    }

    AdrScenario { author, adr_ids }
}
