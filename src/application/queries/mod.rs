pub mod categories;
pub mod content;
pub mod dashboard;
