// tests/support/mocks/identity.rs
use async_trait::async_trait;
use lexpress_core::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::identity::{Viewer, ViewerProvider},
};
use lexpress_core::domain::user::{ExternalUserId, Role};

pub const ADMIN_TOKEN: &str = "admin-token";
pub const OTHER_ADMIN_TOKEN: &str = "other-admin-token";
pub const READER_TOKEN: &str = "reader-token";

/// Resolves a fixed set of opaque tokens; anything else is rejected.
#[derive(Clone, Default)]
pub struct StaticViewerProvider;

pub fn viewer(external_id: &str, name: &str, role: Option<Role>) -> Viewer {
    Viewer {
        external_id: ExternalUserId::new(external_id).expect("external id"),
        name: Some(name.to_string()),
        email: Some(format!("{external_id}@example.com")),
        image_url: None,
        role,
    }
}

pub fn admin_viewer() -> Viewer {
    viewer("user_admin", "Asha Rao", Some(Role::Admin))
}

pub fn reader_viewer() -> Viewer {
    viewer("user_reader", "Meera Iyer", None)
}

#[async_trait]
impl ViewerProvider for StaticViewerProvider {
    async fn current_viewer(&self, bearer: Option<&str>) -> ApplicationResult<Option<Viewer>> {
        match bearer {
            None => Ok(None),
            Some(ADMIN_TOKEN) => Ok(Some(admin_viewer())),
            Some(OTHER_ADMIN_TOKEN) => {
                Ok(Some(viewer("user_admin2", "Vikram Sen", Some(Role::Admin))))
            }
            Some(READER_TOKEN) => Ok(Some(reader_viewer())),
            Some(_) => Err(ApplicationError::unauthorized("unknown session token")),
        }
    }
}
