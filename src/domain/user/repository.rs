// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, User};
use crate::domain::user::value_objects::{ExternalUserId, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;
    async fn find_by_external_id(&self, external_id: &ExternalUserId) -> DomainResult<Option<User>>;
    /// Insert the user unless one with the same external id exists; either
    /// way return the stored record.
    async fn ensure(&self, user: NewUser) -> DomainResult<User>;
}
