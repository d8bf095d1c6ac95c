use super::EngagementCommandService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult, ports::identity::Viewer},
    domain::content::{CommentBody, ContentId, NewComment},
};

pub struct AddCommentCommand {
    pub content_id: i64,
    pub body: String,
}

impl EngagementCommandService {
    pub async fn add_comment(
        &self,
        viewer: Option<&Viewer>,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let content_id = ContentId::new(command.content_id)?;
        let user = self.participant(viewer, content_id).await?;
        let body = CommentBody::new(command.body)?;

        let comment = self
            .comment_repo
            .insert(NewComment {
                content_id,
                body,
                author_id: user.id,
                created_at: self.clock.now(),
            })
            .await?;
        Ok(comment.into())
    }
}
