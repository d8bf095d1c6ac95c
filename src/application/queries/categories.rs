use crate::{
    application::{
        dto::{CategoryDto, ContentPageDto},
        error::{ApplicationError, ApplicationResult},
        queries::content::{ContentQueryService, ListContentQuery},
    },
    domain::content::{Category, Collection, ContentReadRepository},
};
use std::{collections::HashMap, sync::Arc};

pub struct ListCategoryContentQuery {
    pub slug: String,
    pub search: Option<String>,
    pub page: Option<String>,
}

pub struct CategoryQueryService {
    read_repo: Arc<dyn ContentReadRepository>,
    content: Arc<ContentQueryService>,
}

impl CategoryQueryService {
    #[must_use]
    pub const fn new(
        read_repo: Arc<dyn ContentReadRepository>,
        content: Arc<ContentQueryService>,
    ) -> Self {
        Self { read_repo, content }
    }

    /// Whole catalog in display order, each with its item total.
    pub async fn catalog(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let counts: HashMap<Category, u64> =
            self.read_repo.count_by_category().await?.into_iter().collect();

        Ok(Category::ALL
            .into_iter()
            .map(|category| CategoryDto {
                name: category.name().to_string(),
                slug: category.slug().to_string(),
                description: category.description().to_string(),
                article_count: counts.get(&category).copied().unwrap_or(0),
            })
            .collect())
    }

    pub async fn list_category(
        &self,
        query: ListCategoryContentQuery,
    ) -> ApplicationResult<ContentPageDto> {
        let category = Category::from_slug(&query.slug)
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        self.content
            .list_content(ListContentQuery {
                search: query.search,
                page: query.page,
                collection: Collection::Category(category),
            })
            .await
    }
}
