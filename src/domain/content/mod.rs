pub mod category;
pub mod entity;
pub mod query;
pub mod repository;
pub mod text;
pub mod value_objects;

pub use category::Category;
pub use entity::{
    AuthorSummary, Comment, ContentItem, ContentSlice, ContentUpdate, EngagementCounts,
    ListedContent, NewComment, NewContentItem,
};
pub use query::{Collection, ContentPredicate, SearchQuery, TextMatch};
pub use repository::{
    CommentRepository, ContentReadRepository, ContentWriteRepository, LikeRepository,
};
pub use value_objects::{CommentBody, CommentId, ContentBody, ContentId, ContentTitle, CoverImage};
