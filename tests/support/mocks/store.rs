// tests/support/mocks/store.rs
//! One in-memory backing store implementing every repository port, so a
//! single seeded instance drives both service and HTTP tests.
use async_trait::async_trait;
use lexpress_core::domain::content::{
    AuthorSummary, Category, Comment, CommentBody, CommentId, CommentRepository, ContentBody,
    ContentId, ContentItem, ContentPredicate, ContentReadRepository, ContentSlice, ContentTitle,
    ContentUpdate, ContentWriteRepository, CoverImage, EngagementCounts, LikeRepository,
    ListedContent, NewComment, NewContentItem,
};
use lexpress_core::domain::errors::{DomainError, DomainResult};
use lexpress_core::domain::pagination::PageWindow;
use lexpress_core::domain::user::{ExternalUserId, NewUser, User, UserId, UserRepository};
use std::sync::{Arc, Mutex};

use super::time::fixed_now;
use crate::support::builders::ArticleSeed;

#[derive(Default)]
struct State {
    users: Vec<User>,
    items: Vec<ContentItem>,
    comments: Vec<Comment>,
    likes: Vec<(ContentId, UserId)>,
    next_user: i64,
    next_item: i64,
    next_comment: i64,
}

impl State {
    fn author(&self, id: UserId) -> AuthorSummary {
        self.users
            .iter()
            .find(|user| user.id == id)
            .map(User::summary)
            .unwrap_or_else(|| AuthorSummary {
                name: "Unknown".into(),
                email: String::new(),
                image_url: None,
            })
    }

    fn engagement(&self, id: ContentId) -> EngagementCounts {
        EngagementCounts {
            likes: self.likes.iter().filter(|(item, _)| *item == id).count() as u64,
            comments: self.comments.iter().filter(|c| c.content_id == id).count() as u64,
        }
    }

    fn listed(&self, item: &ContentItem, with_engagement: bool) -> ListedContent {
        ListedContent {
            item: item.clone(),
            author: self.author(item.author_id),
            engagement: with_engagement.then(|| self.engagement(item.id)),
        }
    }

    fn newest_first(items: &mut [&ContentItem]) {
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    }

    fn insert_user(&mut self, user: NewUser) -> User {
        self.next_user += 1;
        let user = User {
            id: UserId(self.next_user),
            external_id: user.external_id,
            name: user.name,
            email: user.email,
            image_url: user.image_url,
            created_at: user.created_at,
        };
        self.users.push(user.clone());
        user
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_user(&self, external_id: &str, name: &str) -> UserId {
        let mut state = self.state.lock().unwrap();
        if let Some(user) = state
            .users
            .iter()
            .find(|user| user.external_id.as_str() == external_id)
        {
            return user.id;
        }
        let new_user = NewUser::new(
            ExternalUserId::new(external_id).unwrap(),
            Some(name.to_string()),
            Some(format!("{external_id}@example.com")),
            None,
            fixed_now(),
        );
        state.insert_user(new_user).id
    }

    pub fn seed_article(&self, author: UserId, seed: ArticleSeed) -> ContentId {
        let mut state = self.state.lock().unwrap();
        state.next_item += 1;
        let id = ContentId(state.next_item);
        state.items.push(ContentItem {
            id,
            title: ContentTitle::new(seed.title).unwrap(),
            category: seed.category,
            body: ContentBody::new(seed.body).unwrap(),
            cover_image: seed.cover_image.map(CoverImage::from_stored),
            author_id: author,
            created_at: seed.created_at,
            updated_at: seed.created_at,
        });
        id
    }

    pub fn seed_comment(&self, content_id: ContentId, author: UserId, body: &str) {
        let mut state = self.state.lock().unwrap();
        state.next_comment += 1;
        let comment = Comment {
            id: CommentId(state.next_comment),
            content_id,
            body: CommentBody::new(body).unwrap(),
            author_id: author,
            author: state.author(author),
            created_at: fixed_now(),
        };
        state.comments.push(comment);
    }

    pub fn seed_like(&self, content_id: ContentId, user: UserId) {
        self.state.lock().unwrap().likes.push((content_id, user));
    }

    pub fn article(&self, id: ContentId) -> Option<ContentItem> {
        let state = self.state.lock().unwrap();
        state.items.iter().find(|item| item.id == id).cloned()
    }

    pub fn article_count(&self) -> usize {
        self.state.lock().unwrap().items.len()
    }

    pub fn comment_count(&self) -> usize {
        self.state.lock().unwrap().comments.len()
    }

    pub fn like_count(&self) -> usize {
        self.state.lock().unwrap().likes.len()
    }

    pub fn user_by_external_id(&self, external_id: &str) -> Option<User> {
        let state = self.state.lock().unwrap();
        state
            .users
            .iter()
            .find(|user| user.external_id.as_str() == external_id)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_external_id(
        &self,
        external_id: &ExternalUserId,
    ) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|user| &user.external_id == external_id)
            .cloned())
    }

    async fn ensure(&self, user: NewUser) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state
            .users
            .iter()
            .find(|existing| existing.external_id == user.external_id)
        {
            return Ok(existing.clone());
        }
        Ok(state.insert_user(user))
    }
}

#[async_trait]
impl ContentReadRepository for InMemoryStore {
    async fn fetch_page(
        &self,
        predicate: &ContentPredicate,
        window: PageWindow,
    ) -> DomainResult<ContentSlice> {
        let state = self.state.lock().unwrap();
        let mut matched: Vec<&ContentItem> = state
            .items
            .iter()
            .filter(|item| predicate.matches(item.title.as_str(), item.category))
            .collect();
        State::newest_first(&mut matched);

        let total = matched.len() as u64;
        let with_engagement = predicate.collection().includes_engagement();
        let items = matched
            .into_iter()
            .skip(usize::try_from(window.skip).unwrap_or(usize::MAX))
            .take(usize::try_from(window.take).unwrap_or(usize::MAX))
            .map(|item| state.listed(item, with_engagement))
            .collect();

        Ok(ContentSlice { items, total })
    }

    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ListedContent>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .items
            .iter()
            .find(|item| item.id == id)
            .map(|item| state.listed(item, true)))
    }

    async fn latest(&self, limit: u32) -> DomainResult<Vec<ListedContent>> {
        let state = self.state.lock().unwrap();
        let mut items: Vec<&ContentItem> = state.items.iter().collect();
        State::newest_first(&mut items);
        Ok(items
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .map(|item| state.listed(item, true))
            .collect())
    }

    async fn count_by_category(&self) -> DomainResult<Vec<(Category, u64)>> {
        let state = self.state.lock().unwrap();
        Ok(Category::ALL
            .into_iter()
            .map(|category| {
                let count = state
                    .items
                    .iter()
                    .filter(|item| item.category == category)
                    .count() as u64;
                (category, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect())
    }

    async fn list_by_author(&self, author: UserId) -> DomainResult<Vec<ListedContent>> {
        let state = self.state.lock().unwrap();
        let mut items: Vec<&ContentItem> = state
            .items
            .iter()
            .filter(|item| item.author_id == author)
            .collect();
        State::newest_first(&mut items);
        Ok(items
            .into_iter()
            .map(|item| state.listed(item, true))
            .collect())
    }
}

#[async_trait]
impl ContentWriteRepository for InMemoryStore {
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem> {
        let mut state = self.state.lock().unwrap();
        state.next_item += 1;
        let item = ContentItem {
            id: ContentId(state.next_item),
            title: item.title,
            category: item.category,
            body: item.body,
            cover_image: item.cover_image,
            author_id: item.author_id,
            created_at: item.created_at,
            updated_at: item.created_at,
        };
        state.items.push(item.clone());
        Ok(item)
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentItem> {
        let mut state = self.state.lock().unwrap();
        let item = state
            .items
            .iter_mut()
            .find(|item| item.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if let Some(title) = update.title {
            item.title = title;
        }
        if let Some(category) = update.category {
            item.category = category;
        }
        if let Some(body) = update.body {
            item.body = body;
        }
        if let Some(cover_image) = update.cover_image {
            item.cover_image = Some(cover_image);
        }
        item.updated_at = update.updated_at;
        Ok(item.clone())
    }

    async fn delete(&self, id: ContentId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.items.len();
        state.items.retain(|item| item.id != id);
        if state.items.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        state.comments.retain(|comment| comment.content_id != id);
        state.likes.retain(|(item, _)| *item != id);
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        if !state.items.iter().any(|item| item.id == comment.content_id) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        state.next_comment += 1;
        let comment = Comment {
            id: CommentId(state.next_comment),
            content_id: comment.content_id,
            body: comment.body,
            author_id: comment.author_id,
            author: state.author(comment.author_id),
            created_at: comment.created_at,
        };
        state.comments.push(comment.clone());
        Ok(comment)
    }

    async fn list_for_content(&self, content_id: ContentId) -> DomainResult<Vec<Comment>> {
        let state = self.state.lock().unwrap();
        let mut comments: Vec<Comment> = state
            .comments
            .iter()
            .filter(|comment| comment.content_id == content_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.0.cmp(&b.id.0)));
        Ok(comments)
    }
}

#[async_trait]
impl LikeRepository for InMemoryStore {
    async fn toggle(&self, content_id: ContentId, user_id: UserId) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        let key = (content_id, user_id);
        if state.likes.contains(&key) {
            state.likes.retain(|like| *like != key);
            Ok(false)
        } else {
            state.likes.push(key);
            Ok(true)
        }
    }

    async fn count_for_content(&self, content_id: ContentId) -> DomainResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state.likes.iter().filter(|(item, _)| *item == content_id).count() as u64)
    }

    async fn has_liked(&self, content_id: ContentId, user_id: UserId) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.likes.contains(&(content_id, user_id)))
    }
}
