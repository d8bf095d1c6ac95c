// src/presentation/http/controllers/mod.rs
pub mod categories;
pub mod content;
pub mod dashboard;
pub mod engagement;
pub mod reviews;
