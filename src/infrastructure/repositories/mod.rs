// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_content;
mod postgres_engagement;
mod postgres_user;

pub use error::{contains_pattern, map_sqlx};
pub use postgres_content::{PostgresContentReadRepository, PostgresContentWriteRepository};
pub use postgres_engagement::{PostgresCommentRepository, PostgresLikeRepository};
pub use postgres_user::PostgresUserRepository;
