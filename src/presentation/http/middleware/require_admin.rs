// src/presentation/http/middleware/require_admin.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::extractors::bearer_token;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Gate for dashboard routes: 401 without a verifiable viewer, 403 unless the
/// viewer's role is admin. On success the `Viewer` is stored in the request
/// extensions.
pub async fn require_admin(mut req: Request<Body>, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    let token = bearer_token(req.headers());

    match state.services.authorize_admin(token.as_deref()).await {
        Ok(viewer) => {
            tracing::debug!(viewer = %viewer.external_id, "dashboard access granted");
            req.extensions_mut().insert(viewer);
            next.run(req).await
        }
        Err(err) => HttpError::from_error(err).into_response(),
    }
}
