// src/infrastructure/repositories/postgres_content.rs
use super::{contains_pattern, map_sqlx};
use crate::domain::content::{
    AuthorSummary, Category, ContentBody, ContentId, ContentItem, ContentPredicate,
    ContentReadRepository, ContentSlice, ContentTitle, ContentUpdate, ContentWriteRepository,
    CoverImage, EngagementCounts, ListedContent, NewContentItem, TextMatch,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageWindow;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const CONTENT_COLUMNS: &str =
    "a.id, a.title, a.category, a.body, a.cover_image, a.author_id, a.created_at, a.updated_at";
const AUTHOR_COLUMNS: &str =
    "u.name AS author_name, u.email AS author_email, u.image_url AS author_image_url";
const ENGAGEMENT_COLUMNS: &str =
    "(SELECT COUNT(*) FROM likes l WHERE l.article_id = a.id) AS like_count, \
     (SELECT COUNT(*) FROM comments c WHERE c.article_id = a.id) AS comment_count";
const NO_ENGAGEMENT_COLUMNS: &str = "NULL::BIGINT AS like_count, NULL::BIGINT AS comment_count";
const RETURNING_COLUMNS: &str =
    " RETURNING id, title, category, body, cover_image, author_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresContentWriteRepository {
    pool: PgPool,
}

impl PostgresContentWriteRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresContentReadRepository {
    pool: PgPool,
}

impl PostgresContentReadRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContentRow {
    id: i64,
    title: String,
    category: String,
    body: String,
    cover_image: Option<String>,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct ListedRow {
    #[sqlx(flatten)]
    content: ContentRow,
    author_name: String,
    author_email: String,
    author_image_url: Option<String>,
    like_count: Option<i64>,
    comment_count: Option<i64>,
}

fn stored_category(name: &str) -> DomainResult<Category> {
    Category::from_name(name)
        .ok_or_else(|| DomainError::Persistence(format!("unknown stored category '{name}'")))
}

fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

impl TryFrom<ContentRow> for ContentItem {
    type Error = DomainError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ContentId::new(row.id)?,
            title: ContentTitle::new(row.title)?,
            category: stored_category(&row.category)?,
            body: ContentBody::new(row.body)?,
            cover_image: row.cover_image.map(CoverImage::from_stored),
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl TryFrom<ListedRow> for ListedContent {
    type Error = DomainError;

    fn try_from(row: ListedRow) -> Result<Self, Self::Error> {
        let engagement = match (row.like_count, row.comment_count) {
            (Some(likes), Some(comments)) => Some(EngagementCounts {
                likes: to_count(likes),
                comments: to_count(comments),
            }),
            _ => None,
        };
        Ok(Self {
            item: ContentItem::try_from(row.content)?,
            author: AuthorSummary {
                name: row.author_name,
                email: row.author_email,
                image_url: row.author_image_url,
            },
            engagement,
        })
    }
}

fn collect_listed(rows: Vec<ListedRow>) -> DomainResult<Vec<ListedContent>> {
    rows.into_iter().map(ListedContent::try_from).collect()
}

#[async_trait]
impl ContentWriteRepository for PostgresContentWriteRepository {
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem> {
        let NewContentItem {
            title,
            category,
            body,
            cover_image,
            author_id,
            created_at,
        } = item;

        let row = sqlx::query_as::<_, ContentRow>(
            "INSERT INTO articles (title, category, body, cover_image, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING id, title, category, body, cover_image, author_id, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(category.name())
        .bind(body.as_str())
        .bind(cover_image.as_ref().map(CoverImage::as_str))
        .bind(i64::from(author_id))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ContentItem::try_from(row)
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentItem> {
        let ContentUpdate {
            id,
            title,
            category,
            body,
            cover_image,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category.name());
        }

        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(body.into_inner());
        }

        if let Some(cover_image) = cover_image {
            builder.push(", cover_image = ");
            builder.push_bind(cover_image.into_inner());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(RETURNING_COLUMNS);

        let row = builder
            .build_query_as::<ContentRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        ContentItem::try_from(row)
    }

    async fn delete(&self, id: ContentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

impl PostgresContentReadRepository {
    fn select_listed(with_engagement: bool) -> QueryBuilder<'static, Postgres> {
        let engagement = if with_engagement {
            ENGAGEMENT_COLUMNS
        } else {
            NO_ENGAGEMENT_COLUMNS
        };
        QueryBuilder::new(format!(
            "SELECT {CONTENT_COLUMNS}, {AUTHOR_COLUMNS}, {engagement} \
             FROM articles a JOIN users u ON u.id = a.author_id"
        ))
    }

    fn apply_predicate(builder: &mut QueryBuilder<'_, Postgres>, predicate: &ContentPredicate) {
        builder.push(" WHERE TRUE");

        if let Some(category) = predicate.category() {
            builder.push(" AND a.category = ");
            builder.push_bind(category.name());
        }

        match predicate.text() {
            TextMatch::Any => {}
            TextMatch::Nothing => {
                builder.push(" AND FALSE");
            }
            TextMatch::Title(term) => {
                builder.push(" AND a.title ILIKE ");
                builder.push_bind(contains_pattern(term));
                builder.push(" ESCAPE '\\'");
            }
            TextMatch::TitleOrCategory(term) => {
                let pattern = contains_pattern(term);
                builder.push(" AND (a.title ILIKE ");
                builder.push_bind(pattern.clone());
                builder.push(" ESCAPE '\\' OR a.category ILIKE ");
                builder.push_bind(pattern);
                builder.push(" ESCAPE '\\')");
            }
        }
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>) {
        builder.push(" ORDER BY a.created_at DESC, a.id DESC");
    }
}

#[async_trait]
impl ContentReadRepository for PostgresContentReadRepository {
    async fn fetch_page(
        &self,
        predicate: &ContentPredicate,
        window: PageWindow,
    ) -> DomainResult<ContentSlice> {
        if predicate.is_unsatisfiable() {
            return Ok(ContentSlice::default());
        }

        // count and page must observe the same snapshot
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let mut count: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles a");
        Self::apply_predicate(&mut count, predicate);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let mut builder = Self::select_listed(predicate.collection().includes_engagement());
        Self::apply_predicate(&mut builder, predicate);
        Self::apply_ordering(&mut builder);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(window.take));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(window.skip).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<ListedRow>()
            .fetch_all(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        Ok(ContentSlice {
            items: collect_listed(rows)?,
            total: to_count(total),
        })
    }

    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ListedContent>> {
        let mut builder = Self::select_listed(true);
        builder.push(" WHERE a.id = ");
        builder.push_bind(i64::from(id));

        let row = builder
            .build_query_as::<ListedRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ListedContent::try_from).transpose()
    }

    async fn latest(&self, limit: u32) -> DomainResult<Vec<ListedContent>> {
        let mut builder = Self::select_listed(true);
        Self::apply_ordering(&mut builder);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));

        let rows = builder
            .build_query_as::<ListedRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        collect_listed(rows)
    }

    async fn count_by_category(&self) -> DomainResult<Vec<(Category, u64)>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT category, COUNT(*) FROM articles GROUP BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut counts = Vec::with_capacity(rows.len());
        for (name, total) in rows {
            let Some(category) = Category::from_name(&name) else {
                tracing::warn!(category = %name, "skipping articles with unknown category");
                continue;
            };
            counts.push((category, to_count(total)));
        }
        Ok(counts)
    }

    async fn list_by_author(&self, author: UserId) -> DomainResult<Vec<ListedContent>> {
        let mut builder = Self::select_listed(true);
        builder.push(" WHERE a.author_id = ");
        builder.push_bind(i64::from(author));
        Self::apply_ordering(&mut builder);

        let rows = builder
            .build_query_as::<ListedRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        collect_listed(rows)
    }
}
