//! Request handlers.
//!
//! Handlers delegate persistence to `medora_db` repositories and map errors
//! via [`AppError`](crate::error::AppError).

pub mod admin_auth;
pub mod admin_posts;
pub mod blog;
pub mod contact;
