use std::sync::Arc;

use crate::{
    application::accounts::ViewerAccounts,
    domain::content::{CommentRepository, ContentReadRepository, LikeRepository},
};

pub struct ContentQueryService {
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) like_repo: Arc<dyn LikeRepository>,
    pub(super) accounts: Arc<ViewerAccounts>,
}

impl ContentQueryService {
    #[must_use]
    pub const fn new(
        read_repo: Arc<dyn ContentReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        like_repo: Arc<dyn LikeRepository>,
        accounts: Arc<ViewerAccounts>,
    ) -> Self {
        Self {
            read_repo,
            comment_repo,
            like_repo,
            accounts,
        }
    }
}
