use super::ContentQueryService;
use crate::{
    application::{
        dto::{ContentDetailDto, ContentDto},
        error::{ApplicationError, ApplicationResult},
        ports::identity::Viewer,
    },
    domain::content::{ContentId, text},
};

pub struct GetContentQuery {
    pub id: i64,
    /// Only resolve items from the review collection.
    pub review_only: bool,
}

impl ContentQueryService {
    pub async fn get_content(
        &self,
        viewer: Option<&Viewer>,
        query: GetContentQuery,
    ) -> ApplicationResult<ContentDetailDto> {
        let id = ContentId::new(query.id)?;
        let listed = self
            .read_repo
            .find_by_id(id)
            .await?
            .filter(|listed| !query.review_only || listed.item.is_review())
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let comments = self.comment_repo.list_for_content(id).await?;
        let likes = self.like_repo.count_for_content(id).await?;

        let liked_by_viewer = match viewer {
            Some(viewer) => match self.accounts.lookup(viewer).await? {
                Some(user) => self.like_repo.has_liked(id, user.id).await?,
                None => false,
            },
            None => false,
        };

        let reading_time_minutes = text::reading_time_minutes(listed.item.body.as_str());

        Ok(ContentDetailDto {
            content: ContentDto::from(listed),
            comments: comments.into_iter().map(Into::into).collect(),
            likes,
            liked_by_viewer,
            reading_time_minutes,
        })
    }
}
