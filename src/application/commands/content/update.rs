use super::ContentCommandService;
use crate::{
    application::{
        dto::ContentDto,
        error::{ApplicationError, ApplicationResult},
        ports::identity::Viewer,
    },
    domain::content::{
        ContentBody, ContentId, ContentTitle, ContentUpdate, CoverImage, ListedContent,
        category::parse_category,
    },
};

pub struct UpdateContentCommand {
    pub id: i64,
    pub title: Option<String>,
    pub category: Option<String>,
    pub body: Option<String>,
    pub cover_image: Option<String>,
}

impl ContentCommandService {
    pub async fn update_content(
        &self,
        viewer: Option<&Viewer>,
        command: UpdateContentCommand,
    ) -> ApplicationResult<ContentDto> {
        let user = self.admin_account(viewer).await?;
        let id = ContentId::new(command.id)?;
        self.owned_item(id, &user).await?;

        let mut update = ContentUpdate::new(id, self.clock.now());
        if let Some(title) = command.title {
            update = update.with_title(ContentTitle::for_submission(title)?);
        }
        if let Some(category) = command.category {
            update = update.with_category(parse_category(&category)?);
        }
        if let Some(body) = command.body {
            update = update.with_body(ContentBody::for_submission(body)?);
        }
        // blank means "leave as is", same as on create
        if let Some(cover) = command.cover_image.filter(|uri| !uri.trim().is_empty()) {
            update = update.with_cover_image(CoverImage::new(cover)?);
        }

        if update.is_empty() {
            return Err(ApplicationError::validation("nothing to update"));
        }

        let item = self.write_repo.update(update).await?;
        tracing::info!(content_id = item.id.0, "content updated");

        Ok(ContentDto::from(ListedContent {
            item,
            author: user.summary(),
            engagement: None,
        }))
    }
}
