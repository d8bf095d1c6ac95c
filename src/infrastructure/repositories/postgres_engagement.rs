// src/infrastructure/repositories/postgres_engagement.rs
use super::map_sqlx;
use crate::domain::content::{
    AuthorSummary, Comment, CommentBody, CommentId, CommentRepository, ContentId, LikeRepository,
    NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresLikeRepository {
    pool: PgPool,
}

impl PostgresLikeRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    body: String,
    article_id: i64,
    author_id: i64,
    created_at: DateTime<Utc>,
    author_name: String,
    author_email: String,
    author_image_url: Option<String>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CommentId::new(row.id)?,
            content_id: ContentId::new(row.article_id)?,
            body: CommentBody::new(row.body)?,
            author_id: UserId::new(row.author_id)?,
            author: AuthorSummary {
                name: row.author_name,
                email: row.author_email,
                image_url: row.author_image_url,
            },
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            content_id,
            body,
            author_id,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "WITH inserted AS (
                 INSERT INTO comments (body, article_id, author_id, created_at)
                 VALUES ($1, $2, $3, $4)
                 RETURNING id, body, article_id, author_id, created_at
             )
             SELECT i.id, i.body, i.article_id, i.author_id, i.created_at,
                    u.name AS author_name, u.email AS author_email, u.image_url AS author_image_url
             FROM inserted i JOIN users u ON u.id = i.author_id",
        )
        .bind(body.as_str())
        .bind(i64::from(content_id))
        .bind(i64::from(author_id))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn list_for_content(&self, content_id: ContentId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT c.id, c.body, c.article_id, c.author_id, c.created_at,
                    u.name AS author_name, u.email AS author_email, u.image_url AS author_image_url
             FROM comments c JOIN users u ON u.id = c.author_id
             WHERE c.article_id = $1
             ORDER BY c.created_at ASC, c.id ASC",
        )
        .bind(i64::from(content_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn toggle(&self, content_id: ContentId, user_id: UserId) -> DomainResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let removed = sqlx::query("DELETE FROM likes WHERE article_id = $1 AND user_id = $2")
            .bind(i64::from(content_id))
            .bind(i64::from(user_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected();

        if removed == 0 {
            sqlx::query(
                "INSERT INTO likes (article_id, user_id) VALUES ($1, $2)
                 ON CONFLICT (article_id, user_id) DO NOTHING",
            )
            .bind(i64::from(content_id))
            .bind(i64::from(user_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(removed == 0)
    }

    async fn count_for_content(&self, content_id: ContentId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM likes WHERE article_id = $1")
            .bind(i64::from(content_id))
            .fetch_one(&self.pool)
            .await
            .map(|count| u64::try_from(count).unwrap_or_default())
            .map_err(map_sqlx)
    }

    async fn has_liked(&self, content_id: ContentId, user_id: UserId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM likes WHERE article_id = $1 AND user_id = $2)",
        )
        .bind(i64::from(content_id))
        .bind(i64::from(user_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
