// src/application/accounts.rs
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::{identity::Viewer, time::Clock},
};
use crate::domain::user::{NewUser, User, UserRepository};
use std::sync::Arc;

/// Maps identity-provider viewers onto local user records.
pub struct ViewerAccounts {
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl ViewerAccounts {
    #[must_use]
    pub const fn new(users: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { users, clock }
    }

    /// Local record for the viewer, created on first use.
    pub async fn ensure(&self, viewer: &Viewer) -> ApplicationResult<User> {
        if let Some(user) = self.users.find_by_external_id(&viewer.external_id).await? {
            return Ok(user);
        }

        let new_user = NewUser::new(
            viewer.external_id.clone(),
            viewer.name.clone(),
            viewer.email.clone(),
            viewer.image_url.clone(),
            self.clock.now(),
        );
        let user = self.users.ensure(new_user).await?;
        tracing::info!(
            user_id = user.id.0,
            external_id = %viewer.external_id,
            "synchronised viewer account"
        );
        Ok(user)
    }

    /// Existing local record, without creating one.
    pub async fn lookup(&self, viewer: &Viewer) -> ApplicationResult<Option<User>> {
        Ok(self.users.find_by_external_id(&viewer.external_id).await?)
    }

    pub fn require_admin(viewer: Option<&Viewer>) -> ApplicationResult<&Viewer> {
        let viewer = viewer.ok_or_else(|| ApplicationError::unauthorized("sign in required"))?;
        if !viewer.is_admin() {
            return Err(ApplicationError::forbidden("dashboard access requires the admin role"));
        }
        Ok(viewer)
    }
}
