// src/domain/content/repository.rs
use crate::domain::content::{
    category::Category,
    entity::{
        Comment, ContentItem, ContentSlice, ContentUpdate, ListedContent, NewComment,
        NewContentItem,
    },
    query::ContentPredicate,
    value_objects::ContentId,
};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageWindow;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ContentReadRepository: Send + Sync {
    /// Filtered count plus one newest-first page, read as a single unit.
    async fn fetch_page(
        &self,
        predicate: &ContentPredicate,
        window: PageWindow,
    ) -> DomainResult<ContentSlice>;

    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ListedContent>>;

    /// Newest items across all categories, with comment counts.
    async fn latest(&self, limit: u32) -> DomainResult<Vec<ListedContent>>;

    /// Per-category item totals. Categories without items may be omitted.
    async fn count_by_category(&self) -> DomainResult<Vec<(Category, u64)>>;

    /// Everything one author owns, newest first, with like and comment counts.
    async fn list_by_author(&self, author: UserId) -> DomainResult<Vec<ListedContent>>;
}

#[async_trait]
pub trait ContentWriteRepository: Send + Sync {
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem>;
    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentItem>;
    async fn delete(&self, id: ContentId) -> DomainResult<()>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    /// Oldest first.
    async fn list_for_content(&self, content_id: ContentId) -> DomainResult<Vec<Comment>>;
}

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Flip the user's like on an item. Returns whether the item is now liked.
    async fn toggle(&self, content_id: ContentId, user_id: UserId) -> DomainResult<bool>;
    async fn count_for_content(&self, content_id: ContentId) -> DomainResult<u64>;
    async fn has_liked(&self, content_id: ContentId, user_id: UserId) -> DomainResult<bool>;
}
