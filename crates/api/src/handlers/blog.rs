//! Public blog handlers: listing with search/category filters, categories,
//! and the article page payload.

use axum::extract::{Path, Query, State};
use axum::Json;
use medora_core::blog::{self, build_listing, Listing, ListingFilter, RELATED_POSTS_LIMIT};
use medora_core::error::CoreError;
use medora_core::markdown::render_markdown;
use medora_core::reading_time::reading_time_mins;
use medora_core::types::{DbId, Timestamp};
use medora_db::models::blog_post::BlogPost;
use medora_db::repositories::BlogPostRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Card-sized view of a post used by listings and related posts.
#[derive(Debug, Serialize)]
pub struct PostSummary {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub author: String,
    pub cover_image: Option<String>,
    pub published_at: Option<Timestamp>,
    pub reading_time_mins: u32,
}

impl From<BlogPost> for PostSummary {
    fn from(post: BlogPost) -> Self {
        let reading_time_mins = reading_time_mins(&post.content);
        Self {
            id: post.id,
            slug: post.slug,
            title: post.title,
            excerpt: post.excerpt,
            category: post.category,
            author: post.author,
            cover_image: post.cover_image,
            published_at: post.published_at,
            reading_time_mins,
        }
    }
}

/// The `/blog` page payload: the filtered layout plus every category of
/// published posts for the filter dropdown.
#[derive(Debug, Serialize)]
pub struct BlogIndex {
    #[serde(flatten)]
    pub listing: Listing<PostSummary>,
    pub categories: Vec<String>,
}

/// SEO metadata for an article page.
#[derive(Debug, Serialize)]
pub struct PostMeta {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub og_image: String,
}

/// Full article payload.
#[derive(Debug, Serialize)]
pub struct PostDetail {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub content_html: String,
    pub category: String,
    pub author: String,
    pub cover_image: Option<String>,
    pub published_at: Option<Timestamp>,
    pub reading_time_mins: u32,
    pub meta: PostMeta,
    pub related: Vec<PostSummary>,
}

/// Build the SEO metadata for `post` under `site_url`.
pub fn post_meta(post: &BlogPost, site_url: &str) -> PostMeta {
    PostMeta {
        title: format!("{} - Medora Blog", post.title),
        description: post.excerpt.clone(),
        canonical_url: format!("{site_url}/blog/{}", post.slug),
        og_image: post
            .cover_image
            .clone()
            .unwrap_or_else(|| format!("{site_url}/og-default.png")),
    }
}

/// GET /api/blog/posts?search=&category=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ListingFilter>,
) -> AppResult<Json<BlogIndex>> {
    let posts = BlogPostRepo::list_published(&state.pool).await?;
    let categories = blog::categories(&posts);
    let listing = build_listing(posts, &filter).map(PostSummary::from);
    tracing::debug!(
        total = listing.total,
        search = ?filter.search,
        category = ?filter.category,
        "Blog listing"
    );
    Ok(Json(BlogIndex {
        listing,
        categories,
    }))
}

/// GET /api/blog/categories
pub async fn categories(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let categories = BlogPostRepo::published_categories(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/blog/posts/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<PostDetail>> {
    let post = BlogPostRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFoundBySlug {
            entity: "BlogPost",
            slug,
        }))?;

    let related =
        BlogPostRepo::list_related(&state.pool, &post.category, post.id, RELATED_POSTS_LIMIT)
            .await?
            .into_iter()
            .map(PostSummary::from)
            .collect();

    let meta = post_meta(&post, &state.config.site_url);
    let content_html = render_markdown(&post.content);
    let reading_time_mins = reading_time_mins(&post.content);

    Ok(Json(PostDetail {
        id: post.id,
        slug: post.slug,
        title: post.title,
        excerpt: post.excerpt,
        content: post.content,
        content_html,
        category: post.category,
        author: post.author,
        cover_image: post.cover_image,
        published_at: post.published_at,
        reading_time_mins,
        meta,
        related,
    }))
}
