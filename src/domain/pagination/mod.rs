// src/domain/pagination/mod.rs
mod links;
mod window;

pub use links::{NavControl, PageLink, PageLinkModel};
pub use window::{PageWindow, total_pages};
