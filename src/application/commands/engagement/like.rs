use super::EngagementCommandService;
use crate::{
    application::{dto::LikeStateDto, error::ApplicationResult, ports::identity::Viewer},
    domain::content::ContentId,
};

pub struct ToggleLikeCommand {
    pub content_id: i64,
}

impl EngagementCommandService {
    pub async fn toggle_like(
        &self,
        viewer: Option<&Viewer>,
        command: ToggleLikeCommand,
    ) -> ApplicationResult<LikeStateDto> {
        let content_id = ContentId::new(command.content_id)?;
        let user = self.participant(viewer, content_id).await?;

        let liked = self.like_repo.toggle(content_id, user.id).await?;
        let total = self.like_repo.count_for_content(content_id).await?;
        Ok(LikeStateDto {
            liked,
            likes: total,
        })
    }
}
