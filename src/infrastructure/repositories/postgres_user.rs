// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{ExternalUserId, NewUser, User, UserId, UserRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    external_id: String,
    name: String,
    email: String,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(row.id)?,
            external_id: ExternalUserId::new(row.external_id)?,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, external_id, name, email, image_url, created_at FROM users WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_external_id(
        &self,
        external_id: &ExternalUserId,
    ) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, external_id, name, email, image_url, created_at
             FROM users WHERE external_id = $1",
        )
        .bind(external_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn ensure(&self, user: NewUser) -> DomainResult<User> {
        let NewUser {
            external_id,
            name,
            email,
            image_url,
            created_at,
        } = user;

        // the no-op update makes RETURNING yield the existing row on conflict
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (external_id, name, email, image_url, created_at)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (external_id) DO UPDATE SET external_id = EXCLUDED.external_id
             RETURNING id, external_id, name, email, image_url, created_at",
        )
        .bind(external_id.as_str())
        .bind(name)
        .bind(email)
        .bind(image_url)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }
}
