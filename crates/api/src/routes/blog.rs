//! Public blog routes mounted at `/blog`.

use axum::routing::get;
use axum::Router;

use crate::handlers::blog;
use crate::state::AppState;

/// ```text
/// GET /posts           -> list (?search=&category=)
/// GET /posts/{slug}    -> get_by_slug
/// GET /categories      -> categories
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(blog::list))
        .route("/posts/{slug}", get(blog::get_by_slug))
        .route("/categories", get(blog::categories))
}
