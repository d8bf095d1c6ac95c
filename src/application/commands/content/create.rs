use super::ContentCommandService;
use crate::{
    application::{dto::ContentDto, error::ApplicationResult, ports::identity::Viewer},
    domain::content::{
        ContentBody, ContentTitle, CoverImage, ListedContent, NewContentItem,
        category::parse_category,
    },
};

pub struct CreateContentCommand {
    pub title: String,
    pub category: String,
    pub body: String,
    pub cover_image: Option<String>,
}

impl ContentCommandService {
    pub async fn create_content(
        &self,
        viewer: Option<&Viewer>,
        command: CreateContentCommand,
    ) -> ApplicationResult<ContentDto> {
        let author = self.admin_account(viewer).await?;

        let title = ContentTitle::for_submission(command.title)?;
        let category = parse_category(&command.category)?;
        let body = ContentBody::for_submission(command.body)?;
        let cover_image = command
            .cover_image
            .filter(|uri| !uri.trim().is_empty())
            .map(CoverImage::new)
            .transpose()?;

        let item = self
            .write_repo
            .insert(NewContentItem {
                title,
                category,
                body,
                cover_image,
                author_id: author.id,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(
            content_id = item.id.0,
            author_id = author.id.0,
            category = %item.category,
            "content created"
        );

        Ok(ContentDto::from(ListedContent {
            item,
            author: author.summary(),
            engagement: None,
        }))
    }
}
