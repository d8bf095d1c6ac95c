// src/domain/content/entity.rs
use crate::domain::content::{
    category::Category,
    value_objects::{CommentBody, CommentId, ContentBody, ContentId, ContentTitle, CoverImage},
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct ContentItem {
    pub id: ContentId,
    pub title: ContentTitle,
    pub category: Category,
    pub body: ContentBody,
    pub cover_image: Option<CoverImage>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentItem {
    #[must_use]
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.author_id == user
    }

    #[must_use]
    pub const fn is_review(&self) -> bool {
        self.category.is_review()
    }
}

/// Denormalised projection of the owning user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSummary {
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngagementCounts {
    pub likes: u64,
    pub comments: u64,
}

/// A content item joined with what listings show next to it.
#[derive(Debug, Clone)]
pub struct ListedContent {
    pub item: ContentItem,
    pub author: AuthorSummary,
    pub engagement: Option<EngagementCounts>,
}

/// One page of a filtered listing plus the size of the whole match set.
#[derive(Debug, Clone, Default)]
pub struct ContentSlice {
    pub items: Vec<ListedContent>,
    pub total: u64,
}

#[derive(Debug, Clone)]
pub struct NewContentItem {
    pub title: ContentTitle,
    pub category: Category,
    pub body: ContentBody,
    pub cover_image: Option<CoverImage>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ContentUpdate {
    pub id: ContentId,
    pub title: Option<ContentTitle>,
    pub category: Option<Category>,
    pub body: Option<ContentBody>,
    pub cover_image: Option<CoverImage>,
    pub updated_at: DateTime<Utc>,
}

impl ContentUpdate {
    #[must_use]
    pub const fn new(id: ContentId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            category: None,
            body: None,
            cover_image: None,
            updated_at,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: ContentTitle) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: ContentBody) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_cover_image(mut self, cover_image: CoverImage) -> Self {
        self.cover_image = Some(cover_image);
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.body.is_none()
            && self.cover_image.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub content_id: ContentId,
    pub body: CommentBody,
    pub author_id: UserId,
    pub author: AuthorSummary,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub content_id: ContentId,
    pub body: CommentBody,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}
