//! Authorization extractors.
//!
//! - [`admin::RequireAdmin`] -- Requires a valid admin session cookie.

pub mod admin;
