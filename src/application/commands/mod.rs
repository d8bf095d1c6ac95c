pub mod content;
pub mod engagement;
