mod comment;
mod like;
mod service;

pub use comment::AddCommentCommand;
pub use like::ToggleLikeCommand;
pub use service::EngagementCommandService;
