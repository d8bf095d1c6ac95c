// src/presentation/http/middleware/mod.rs
mod require_admin;

pub use require_admin::require_admin;
