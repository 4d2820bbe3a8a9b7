pub mod admin;
pub mod blog;
pub mod contact;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /blog/posts                      published listing (?search=&category=)
/// /blog/posts/{slug}               article detail with related posts
/// /blog/categories                 categories of published posts
///
/// /contact                         contact form (POST)
///
/// /admin/auth                      login (POST), logout (DELETE)
/// /admin/posts                     list, create (admin only)
/// /admin/posts/{id}                get, update, delete (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public blog.
        .nest("/blog", blog::router())
        // Contact form.
        .merge(contact::router())
        // Admin session and blog CMS.
        .nest("/admin", admin::router())
}
