// src/application/dto/content.rs
use crate::domain::content::{AuthorSummary, Comment, CoverImage, ListedContent, text};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct AuthorDto {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<AuthorSummary> for AuthorDto {
    fn from(author: AuthorSummary) -> Self {
        Self {
            name: author.name,
            email: author.email,
            image_url: author.image_url,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct EngagementDto {
    pub likes: u64,
    pub comments: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentDto {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub category_slug: String,
    /// Stored markup, passed through untouched.
    pub body: String,
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub author: AuthorDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement: Option<EngagementDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ListedContent> for ContentDto {
    fn from(listed: ListedContent) -> Self {
        let ListedContent {
            item,
            author,
            engagement,
        } = listed;
        let excerpt = text::excerpt(item.body.as_str());
        Self {
            id: item.id.into(),
            title: item.title.into_inner(),
            category: item.category.name().to_string(),
            category_slug: item.category.slug().to_string(),
            body: item.body.into_inner(),
            excerpt,
            cover_image: item.cover_image.map(CoverImage::into_inner),
            author: author.into(),
            engagement: engagement.map(|counts| EngagementDto {
                likes: counts.likes,
                comments: counts.comments,
            }),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub body: String,
    pub author: AuthorDto,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            body: comment.body.into_inner(),
            author: comment.author.into(),
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentDetailDto {
    pub content: ContentDto,
    pub comments: Vec<CommentDto>,
    pub likes: u64,
    pub liked_by_viewer: bool,
    pub reading_time_minutes: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct LikeStateDto {
    pub liked: bool,
    pub likes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub article_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub articles: Vec<ContentDto>,
    pub total_articles: u64,
    pub total_comments: u64,
    pub total_likes: u64,
}
