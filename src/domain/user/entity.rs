// src/domain/user/entity.rs
use crate::domain::content::AuthorSummary;
use crate::domain::user::value_objects::{ExternalUserId, UserId};
use chrono::{DateTime, Utc};

/// Local mirror of an identity-provider account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub external_id: ExternalUserId,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    #[must_use]
    pub fn summary(&self) -> AuthorSummary {
        AuthorSummary {
            name: self.name.clone(),
            email: self.email.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub external_id: ExternalUserId,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// Display name falls back to the email address, then to "User".
    #[must_use]
    pub fn new(
        external_id: ExternalUserId,
        name: Option<String>,
        email: Option<String>,
        image_url: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let email = email.unwrap_or_default();
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .or_else(|| Some(email.clone()).filter(|e| !e.is_empty()))
            .unwrap_or_else(|| "User".to_string());
        Self {
            external_id,
            name,
            email,
            image_url: image_url.filter(|url| !url.is_empty()),
            created_at,
        }
    }
}
