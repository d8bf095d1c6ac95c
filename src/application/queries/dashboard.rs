use crate::{
    application::{
        accounts::ViewerAccounts,
        dto::{ContentDto, DashboardDto},
        error::ApplicationResult,
        ports::identity::Viewer,
    },
    domain::content::ContentReadRepository,
};
use std::sync::Arc;

pub struct DashboardQueryService {
    read_repo: Arc<dyn ContentReadRepository>,
    accounts: Arc<ViewerAccounts>,
}

impl DashboardQueryService {
    #[must_use]
    pub const fn new(
        read_repo: Arc<dyn ContentReadRepository>,
        accounts: Arc<ViewerAccounts>,
    ) -> Self {
        Self { read_repo, accounts }
    }

    /// The signed-in administrator's own pieces and engagement totals.
    pub async fn overview(&self, viewer: Option<&Viewer>) -> ApplicationResult<DashboardDto> {
        let viewer = ViewerAccounts::require_admin(viewer)?;
        let user = self.accounts.ensure(viewer).await?;

        let records = self.read_repo.list_by_author(user.id).await?;
        let (total_likes, total_comments) = records
            .iter()
            .filter_map(|listed| listed.engagement)
            .fold((0u64, 0u64), |(likes, comments), counts| {
                (likes + counts.likes, comments + counts.comments)
            });

        Ok(DashboardDto {
            total_articles: records.len() as u64,
            total_comments,
            total_likes,
            articles: records.into_iter().map(ContentDto::from).collect(),
        })
    }
}
