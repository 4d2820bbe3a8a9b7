//! Admin authentication: shared password check and session cookie tokens.

pub mod session;
