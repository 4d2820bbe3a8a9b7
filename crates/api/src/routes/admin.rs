//! Admin CMS routes mounted at `/admin`.
//!
//! `/auth` is public; every `/posts` handler extracts
//! [`RequireAdmin`](crate::middleware::admin::RequireAdmin).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{admin_auth, admin_posts};
use crate::state::AppState;

/// ```text
/// POST   /auth          -> login
/// DELETE /auth          -> logout
/// GET    /posts         -> list
/// POST   /posts         -> create
/// GET    /posts/{id}    -> get_by_id
/// PATCH  /posts/{id}    -> update
/// DELETE /posts/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth", post(admin_auth::login).delete(admin_auth::logout))
        .route("/posts", get(admin_posts::list).post(admin_posts::create))
        .route(
            "/posts/{id}",
            get(admin_posts::get_by_id)
                .patch(admin_posts::update)
                .delete(admin_posts::delete),
        )
}
