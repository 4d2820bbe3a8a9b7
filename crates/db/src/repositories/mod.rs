//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod blog_post_repo;

pub use blog_post_repo::{is_slug_conflict, BlogPostRepo, PgSlugLookup};
