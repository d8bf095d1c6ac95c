// src/application/ports/identity.rs
use crate::application::ApplicationResult;
use crate::domain::user::{ExternalUserId, Role};
use async_trait::async_trait;

/// Who is looking at the page, as vouched for by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub external_id: ExternalUserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
    pub role: Option<Role>,
}

impl Viewer {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.is_some_and(Role::can_access_dashboard)
    }
}

/// Resolves the current viewer from the request's bearer credential.
///
/// `Ok(None)` means an anonymous request. A credential that is present but
/// cannot be verified is an `Unauthorized` error, never silently anonymous.
#[async_trait]
pub trait ViewerProvider: Send + Sync {
    async fn current_viewer(&self, bearer: Option<&str>) -> ApplicationResult<Option<Viewer>>;
}
