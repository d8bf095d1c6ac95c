use super::ContentQueryService;
use crate::application::{dto::ContentDto, error::ApplicationResult};

/// Size of the home-page feed.
pub const LATEST_FEED_SIZE: u32 = 6;

impl ContentQueryService {
    pub async fn latest_content(&self) -> ApplicationResult<Vec<ContentDto>> {
        let records = self.read_repo.latest(LATEST_FEED_SIZE).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
