pub mod content;
pub mod pagination;

pub use content::{
    AuthorDto, CategoryDto, CommentDto, ContentDetailDto, ContentDto, DashboardDto,
    EngagementDto, LikeStateDto,
};
pub use pagination::{ContentPageDto, NavControlDto, PageLinkDto, PageLinksDto, ShowingRangeDto};
