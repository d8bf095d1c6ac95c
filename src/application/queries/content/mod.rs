mod detail;
mod latest;
mod list;
mod service;

pub use detail::GetContentQuery;
pub use latest::LATEST_FEED_SIZE;
pub use list::ListContentQuery;
pub use service::ContentQueryService;
