use super::ContentQueryService;
use crate::{
    application::{
        dto::{ContentPageDto, PageLinksDto, ShowingRangeDto},
        error::ApplicationResult,
    },
    domain::{
        content::{Collection, ContentSlice, SearchQuery},
        pagination::{PageLinkModel, PageWindow, total_pages},
    },
};

/// Raw listing parameters as they arrive from the query string.
pub struct ListContentQuery {
    pub search: Option<String>,
    pub page: Option<String>,
    pub collection: Collection,
}

impl ContentQueryService {
    pub async fn list_content(&self, query: ListContentQuery) -> ApplicationResult<ContentPageDto> {
        let query = SearchQuery::from_raw(
            query.search.as_deref(),
            query.page.as_deref(),
            query.collection,
        );
        self.list_page(query).await
    }

    /// Predicate, window, fetch, then navigation for one listing page.
    pub async fn list_page(&self, query: SearchQuery) -> ApplicationResult<ContentPageDto> {
        let predicate = query.predicate();
        let page_size = query.collection.page_size();
        let window = PageWindow::compute(query.page, page_size);

        let slice = if predicate.is_unsatisfiable() {
            ContentSlice::default()
        } else {
            self.read_repo.fetch_page(&predicate, window).await?
        };

        let pages = total_pages(slice.total, page_size);
        let links = PageLinkModel::build(window.page, pages);
        let showing = window
            .showing_range(slice.total)
            .filter(|_| !slice.items.is_empty())
            .map(|(from, to)| ShowingRangeDto { from, to });

        Ok(ContentPageDto {
            items: slice.items.into_iter().map(Into::into).collect(),
            search: query.search,
            page: window.page,
            page_size,
            total: slice.total,
            total_pages: pages,
            showing,
            links: PageLinksDto::from(links),
        })
    }
}
