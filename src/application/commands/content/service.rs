use std::sync::Arc;

use crate::{
    application::{
        accounts::ViewerAccounts,
        error::{ApplicationError, ApplicationResult},
        ports::{identity::Viewer, time::Clock},
    },
    domain::{
        content::{ContentId, ContentItem, ContentReadRepository, ContentWriteRepository},
        user::User,
    },
};

pub struct ContentCommandService {
    pub(super) write_repo: Arc<dyn ContentWriteRepository>,
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) accounts: Arc<ViewerAccounts>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ContentCommandService {
    #[must_use]
    pub const fn new(
        write_repo: Arc<dyn ContentWriteRepository>,
        read_repo: Arc<dyn ContentReadRepository>,
        accounts: Arc<ViewerAccounts>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            accounts,
            clock,
        }
    }

    pub(super) async fn admin_account(&self, viewer: Option<&Viewer>) -> ApplicationResult<User> {
        let viewer = ViewerAccounts::require_admin(viewer)?;
        self.accounts.ensure(viewer).await
    }

    /// Load an item and check the acting user owns it.
    pub(super) async fn owned_item(
        &self,
        id: ContentId,
        user: &User,
    ) -> ApplicationResult<ContentItem> {
        let listed = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !listed.item.is_owned_by(user.id) {
            return Err(ApplicationError::forbidden(
                "only the author can change this article",
            ));
        }
        Ok(listed.item)
    }
}
