// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        accounts::ViewerAccounts,
        commands::{content::ContentCommandService, engagement::EngagementCommandService},
        ports::{
            identity::{Viewer, ViewerProvider},
            time::Clock,
        },
        queries::{
            categories::CategoryQueryService, content::ContentQueryService,
            dashboard::DashboardQueryService,
        },
    },
    domain::{
        content::{CommentRepository, ContentReadRepository, ContentWriteRepository, LikeRepository},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub content_queries: Arc<ContentQueryService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub dashboard_queries: Arc<DashboardQueryService>,
    pub content_commands: Arc<ContentCommandService>,
    pub engagement_commands: Arc<EngagementCommandService>,
    viewer_provider: Arc<dyn ViewerProvider>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        content_read_repo: Arc<dyn ContentReadRepository>,
        content_write_repo: Arc<dyn ContentWriteRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        like_repo: Arc<dyn LikeRepository>,
        viewer_provider: Arc<dyn ViewerProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let accounts = Arc::new(ViewerAccounts::new(user_repo, Arc::clone(&clock)));

        let content_queries = Arc::new(ContentQueryService::new(
            Arc::clone(&content_read_repo),
            Arc::clone(&comment_repo),
            Arc::clone(&like_repo),
            Arc::clone(&accounts),
        ));

        let category_queries = Arc::new(CategoryQueryService::new(
            Arc::clone(&content_read_repo),
            Arc::clone(&content_queries),
        ));

        let dashboard_queries = Arc::new(DashboardQueryService::new(
            Arc::clone(&content_read_repo),
            Arc::clone(&accounts),
        ));

        let content_commands = Arc::new(ContentCommandService::new(
            content_write_repo,
            Arc::clone(&content_read_repo),
            Arc::clone(&accounts),
            Arc::clone(&clock),
        ));

        let engagement_commands = Arc::new(EngagementCommandService::new(
            content_read_repo,
            comment_repo,
            like_repo,
            accounts,
            clock,
        ));

        Self {
            content_queries,
            category_queries,
            dashboard_queries,
            content_commands,
            engagement_commands,
            viewer_provider,
        }
    }

    #[must_use]
    pub fn viewer_provider(&self) -> Arc<dyn ViewerProvider> {
        Arc::clone(&self.viewer_provider)
    }

    /// Resolve the bearer credential and require the admin role.
    pub async fn authorize_admin(&self, bearer: Option<&str>) -> ApplicationResult<Viewer> {
        let viewer = self.viewer_provider.current_viewer(bearer).await?;
        ViewerAccounts::require_admin(viewer.as_ref()).cloned()
    }
}
