// tests/support/mocks/failing.rs
use async_trait::async_trait;
use lexpress_core::domain::content::{
    Category, ContentId, ContentPredicate, ContentReadRepository, ContentSlice, ListedContent,
};
use lexpress_core::domain::errors::{DomainError, DomainResult};
use lexpress_core::domain::pagination::PageWindow;
use lexpress_core::domain::user::UserId;

/// Read side whose store never answers in time.
#[derive(Clone, Default)]
pub struct FailingContentRepo;

fn timed_out<T>() -> DomainResult<T> {
    Err(DomainError::StoreUnavailable(
        "pool timed out while waiting for an open connection".into(),
    ))
}

#[async_trait]
impl ContentReadRepository for FailingContentRepo {
    async fn fetch_page(
        &self,
        _predicate: &ContentPredicate,
        _window: PageWindow,
    ) -> DomainResult<ContentSlice> {
        timed_out()
    }

    async fn find_by_id(&self, _id: ContentId) -> DomainResult<Option<ListedContent>> {
        timed_out()
    }

    async fn latest(&self, _limit: u32) -> DomainResult<Vec<ListedContent>> {
        timed_out()
    }

    async fn count_by_category(&self) -> DomainResult<Vec<(Category, u64)>> {
        timed_out()
    }

    async fn list_by_author(&self, _author: UserId) -> DomainResult<Vec<ListedContent>> {
        timed_out()
    }
}
