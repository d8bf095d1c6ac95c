// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};
use lexpress_core::domain::content::Category;

use super::mocks::fixed_now;

pub struct ArticleSeed {
    pub title: String,
    pub category: Category,
    pub body: String,
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ArticleSeed {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: Category::Civil,
            body: "<p>A short commentary on recent developments.</p>".into(),
            cover_image: None,
            created_at: fixed_now(),
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn cover_image(mut self, url: impl Into<String>) -> Self {
        self.cover_image = Some(url.into());
        self
    }

    /// Publish `minutes` before the fixed test clock.
    pub fn minutes_ago(mut self, minutes: i64) -> Self {
        self.created_at = fixed_now() - Duration::minutes(minutes);
        self
    }
}
