//! Handlers for the `/admin/posts` resource (blog CMS).
//!
//! Every handler requires a valid admin session cookie.

use std::future::Future;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use medora_core::error::CoreError;
use medora_core::slug::{allocate_unique, require_slug, SLUG_CONFLICT_RETRIES};
use medora_core::types::DbId;
use medora_db::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};
use medora_db::repositories::{is_slug_conflict, BlogPostRepo, PgSlugLookup};
use medora_db::DbPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::SuccessResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "BlogPost",
        id,
    })
}

/// Allocate a slug from `base_slug` and run `write` with it.
///
/// Allocation is only a pre-check; when `write` loses a race for the slug
/// (unique violation on `uq_blog_posts_slug`) allocation runs again, up to
/// [`SLUG_CONFLICT_RETRIES`] more times before answering 409.
async fn write_with_unique_slug<T, F, Fut>(
    pool: &DbPool,
    base_slug: &str,
    current_slug: Option<&str>,
    mut write: F,
) -> AppResult<T>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<T, sqlx::Error>>,
{
    let mut attempt = 0;
    loop {
        let slug = allocate_unique(&PgSlugLookup(pool), base_slug, current_slug).await?;

        match write(slug.clone()).await {
            Err(e) if is_slug_conflict(&e) => {
                if attempt >= SLUG_CONFLICT_RETRIES {
                    tracing::warn!(
                        base_slug,
                        slug = %slug,
                        "Giving up on slug after repeated conflicts"
                    );
                    return Err(AppError::Core(CoreError::Conflict(format!(
                        "Slug '{slug}' was taken concurrently, please retry"
                    ))));
                }
                attempt += 1;
                tracing::info!(
                    base_slug,
                    slug = %slug,
                    attempt,
                    "Slug claimed concurrently, reallocating"
                );
            }
            other => return other.map_err(AppError::from),
        }
    }
}

/// GET /api/admin/posts
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BlogPost>>> {
    let posts = BlogPostRepo::list(&state.pool).await?;
    Ok(Json(posts))
}

/// GET /api/admin/posts/{id}
pub async fn get_by_id(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogPostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(post))
}

/// POST /api/admin/posts
pub async fn create(
    admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<(StatusCode, Json<BlogPost>)> {
    input.validate()?;
    let base_slug = require_slug(input.slug_source())?;

    let pool = &state.pool;
    let input = &input;
    let post = write_with_unique_slug(pool, &base_slug, None, move |slug| async move {
        BlogPostRepo::create(pool, input, &slug).await
    })
    .await?;

    tracing::info!(
        post_id = post.id,
        slug = %post.slug,
        session = %admin.session_id,
        "Blog post created"
    );
    Ok((StatusCode::CREATED, Json(post)))
}

/// PATCH /api/admin/posts/{id}
///
/// Partial update. The slug is re-allocated only when an explicit new slug
/// is given, or when the title changes and no slug is given.
pub async fn update(
    admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlogPost>,
) -> AppResult<Json<BlogPost>> {
    input.validate()?;
    if input.is_empty() {
        return Err(AppError::BadRequest("No fields to update".into()));
    }

    let existing = BlogPostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let pool = &state.pool;
    let patch = &input;
    let updated = match input.slug_source(&existing) {
        Some(source) => {
            let base_slug = require_slug(source)?;
            write_with_unique_slug(pool, &base_slug, Some(&existing.slug), move |slug| async move {
                BlogPostRepo::update(pool, id, patch, &slug).await
            })
            .await?
        }
        None => BlogPostRepo::update(pool, id, patch, &existing.slug).await?,
    };

    let post = updated.ok_or_else(|| not_found(id))?;
    if post.slug != existing.slug {
        tracing::info!(
            post_id = id,
            from = %existing.slug,
            to = %post.slug,
            "Blog post slug changed"
        );
    }
    tracing::info!(post_id = id, session = %admin.session_id, "Blog post updated");
    Ok(Json(post))
}

/// DELETE /api/admin/posts/{id}
pub async fn delete(
    admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    let deleted = BlogPostRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(post_id = id, session = %admin.session_id, "Blog post deleted");
        Ok(Json(SuccessResponse::ok()))
    } else {
        Err(not_found(id))
    }
}
