use std::sync::Arc;

use crate::{
    application::{
        accounts::ViewerAccounts,
        error::{ApplicationError, ApplicationResult},
        ports::{identity::Viewer, time::Clock},
    },
    domain::{
        content::{CommentRepository, ContentId, ContentReadRepository, LikeRepository},
        user::User,
    },
};

pub struct EngagementCommandService {
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) like_repo: Arc<dyn LikeRepository>,
    pub(super) accounts: Arc<ViewerAccounts>,
    pub(super) clock: Arc<dyn Clock>,
}

impl EngagementCommandService {
    #[must_use]
    pub const fn new(
        read_repo: Arc<dyn ContentReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        like_repo: Arc<dyn LikeRepository>,
        accounts: Arc<ViewerAccounts>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            comment_repo,
            like_repo,
            accounts,
            clock,
        }
    }

    /// Signed-in viewer's account plus a check that the target item exists.
    pub(super) async fn participant(
        &self,
        viewer: Option<&Viewer>,
        content_id: ContentId,
    ) -> ApplicationResult<User> {
        let viewer = viewer.ok_or_else(|| ApplicationError::unauthorized("sign in required"))?;
        if self.read_repo.find_by_id(content_id).await?.is_none() {
            return Err(ApplicationError::not_found("article not found"));
        }
        self.accounts.ensure(viewer).await
    }
}
