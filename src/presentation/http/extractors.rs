// src/presentation/http/extractors.rs
use crate::{
    application::{error::ApplicationError, ports::identity::Viewer},
    presentation::http::state::HttpState,
};
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// The request's viewer, or `None` for anonymous requests. A bearer token
/// that fails verification rejects the request with 401.
#[derive(Debug, Clone)]
pub struct MaybeViewer(pub Option<Viewer>);

impl MaybeViewer {
    #[must_use]
    pub const fn viewer(&self) -> Option<&Viewer> {
        self.0.as_ref()
    }
}

pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_string())
}

impl<S> FromRequestParts<S> for MaybeViewer
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;

        let token = bearer_token(&parts.headers);
        let viewer = app_state
            .services
            .viewer_provider()
            .current_viewer(token.as_deref())
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(viewer))
    }
}
