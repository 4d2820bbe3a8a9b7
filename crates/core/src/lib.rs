//! Domain logic for the Medora site: slug allocation, blog listing rules,
//! reading-time estimates, markdown rendering and contact form messages.
//!
//! This crate has no internal dependencies so it can be shared by the API
//! server, the database layer and the seed tool.

pub mod blog;
pub mod contact;
pub mod error;
pub mod markdown;
pub mod reading_time;
pub mod slug;
pub mod types;
