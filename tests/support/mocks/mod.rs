// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod failing;
pub mod identity;
pub mod store;
pub mod time;

pub use failing::FailingContentRepo;
pub use identity::{ADMIN_TOKEN, OTHER_ADMIN_TOKEN, READER_TOKEN, StaticViewerProvider};
pub use store::InMemoryStore;
pub use time::{FixedClock, fixed_now};
