//! Integration tests for the blog post repository against a real database:
//! - Create defaults and `cover_image` blanking
//! - Slug uniqueness constraint and conflict detection
//! - Slug allocation through the `PgSlugLookup` port
//! - Patch semantics, publish toggle, listing and related posts

use chrono::{Duration, TimeZone, Utc};
use medora_core::slug::allocate_unique;
use medora_db::models::blog_post::{CreateBlogPost, UpdateBlogPost};
use medora_db::repositories::{is_slug_conflict, BlogPostRepo, PgSlugLookup};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_post(title: &str, category: &str) -> CreateBlogPost {
    CreateBlogPost {
        title: title.to_string(),
        slug: None,
        excerpt: format!("{title} excerpt"),
        content: format!("# {title}\n\nBody."),
        category: category.to_string(),
        author: "Anna Solovyova".to_string(),
        cover_image: None,
        published: None,
        published_at: None,
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_applies_defaults(pool: PgPool) {
    let mut input = new_post("Sales x AI", "Sales & Growth");
    input.cover_image = Some(String::new());

    let post = BlogPostRepo::create(&pool, &input, "sales-x-ai").await.unwrap();

    assert_eq!(post.slug, "sales-x-ai");
    assert!(post.published, "posts are published by default");
    assert!(post.published_at.is_some(), "published_at defaults to now");
    assert_eq!(post.cover_image, None, "blank cover image stored as NULL");
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_slug_is_a_slug_conflict(pool: PgPool) {
    BlogPostRepo::create(&pool, &new_post("A", "c"), "same").await.unwrap();
    let err = BlogPostRepo::create(&pool, &new_post("B", "c"), "same")
        .await
        .unwrap_err();

    assert!(is_slug_conflict(&err), "expected uq_blog_posts_slug violation, got {err}");
}

#[sqlx::test(migrations = "./migrations")]
async fn empty_slug_is_rejected_by_schema(pool: PgPool) {
    let result = BlogPostRepo::create(&pool, &new_post("A", "c"), "").await;
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Slug allocation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn allocation_suffixes_against_stored_posts(pool: PgPool) {
    let lookup = PgSlugLookup(&pool);
    assert_eq!(allocate_unique(&lookup, "post", None).await.unwrap(), "post");

    BlogPostRepo::create(&pool, &new_post("Post", "c"), "post").await.unwrap();
    BlogPostRepo::create(&pool, &new_post("Post", "c"), "post-1").await.unwrap();

    assert_eq!(allocate_unique(&lookup, "post", None).await.unwrap(), "post-2");
    assert_eq!(
        allocate_unique(&lookup, "post", Some("post")).await.unwrap(),
        "post"
    );
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn publish_toggle_keeps_other_fields(pool: PgPool) {
    let mut input = new_post("Keep Me", "c");
    input.cover_image = Some("https://cdn.example/cover.png".to_string());
    let created = BlogPostRepo::create(&pool, &input, "keep-me").await.unwrap();

    let patch = UpdateBlogPost {
        published: Some(false),
        ..Default::default()
    };
    let updated = BlogPostRepo::update(&pool, created.id, &patch, &created.slug)
        .await
        .unwrap()
        .unwrap();

    assert!(!updated.published);
    assert_eq!(updated.title, "Keep Me");
    assert_eq!(updated.cover_image.as_deref(), Some("https://cdn.example/cover.png"));
    assert_eq!(updated.published_at, created.published_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn blank_cover_image_clears_it(pool: PgPool) {
    let mut input = new_post("Cover", "c");
    input.cover_image = Some("https://cdn.example/c.png".to_string());
    let created = BlogPostRepo::create(&pool, &input, "cover").await.unwrap();

    let patch = UpdateBlogPost {
        cover_image: Some(String::new()),
        ..Default::default()
    };
    let updated = BlogPostRepo::update(&pool, created.id, &patch, "cover")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.cover_image, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_missing_post_returns_none(pool: PgPool) {
    let result = BlogPostRepo::update(&pool, 999_999, &UpdateBlogPost::default(), "x")
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_removes_row(pool: PgPool) {
    let created = BlogPostRepo::create(&pool, &new_post("Gone", "c"), "gone")
        .await
        .unwrap();
    assert!(BlogPostRepo::delete(&pool, created.id).await.unwrap());
    assert!(!BlogPostRepo::delete(&pool, created.id).await.unwrap());
    assert!(BlogPostRepo::find_by_slug(&pool, "gone").await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn published_listing_hides_drafts_and_orders_by_date(pool: PgPool) {
    let base = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();

    let mut older = new_post("Older", "AI");
    older.published_at = Some(base - Duration::days(10));
    let mut newer = new_post("Newer", "AI");
    newer.published_at = Some(base);
    let mut draft = new_post("Draft", "AI");
    draft.published = Some(false);

    BlogPostRepo::create(&pool, &older, "older").await.unwrap();
    BlogPostRepo::create(&pool, &newer, "newer").await.unwrap();
    BlogPostRepo::create(&pool, &draft, "draft").await.unwrap();

    let published = BlogPostRepo::list_published(&pool).await.unwrap();
    let slugs: Vec<&str> = published.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, ["newer", "older"]);

    assert!(BlogPostRepo::find_published_by_slug(&pool, "draft")
        .await
        .unwrap()
        .is_none());
    assert_eq!(BlogPostRepo::list(&pool).await.unwrap().len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn related_posts_share_category_and_exclude_self(pool: PgPool) {
    let main = BlogPostRepo::create(&pool, &new_post("Main", "AI"), "main")
        .await
        .unwrap();
    for i in 0..4 {
        BlogPostRepo::create(&pool, &new_post(&format!("AI {i}"), "AI"), &format!("ai-{i}"))
            .await
            .unwrap();
    }
    BlogPostRepo::create(&pool, &new_post("Other", "Sales"), "other")
        .await
        .unwrap();

    let related = BlogPostRepo::list_related(&pool, "AI", main.id, 3).await.unwrap();
    assert_eq!(related.len(), 3);
    assert!(related.iter().all(|p| p.category == "AI" && p.id != main.id));

    let categories = BlogPostRepo::published_categories(&pool).await.unwrap();
    assert_eq!(categories, ["AI", "Sales"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn related_posts_put_undated_first(pool: PgPool) {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let main = BlogPostRepo::create(&pool, &new_post("Main", "AI"), "main")
        .await
        .unwrap();

    let mut older = new_post("Older", "AI");
    older.published_at = Some(base - Duration::days(10));
    let older = BlogPostRepo::create(&pool, &older, "older").await.unwrap();

    let mut newer = new_post("Newer", "AI");
    newer.published_at = Some(base);
    let newer = BlogPostRepo::create(&pool, &newer, "newer").await.unwrap();

    let undated = BlogPostRepo::create(&pool, &new_post("Undated", "AI"), "undated")
        .await
        .unwrap();
    sqlx::query("UPDATE blog_posts SET published_at = NULL WHERE id = $1")
        .bind(undated.id)
        .execute(&pool)
        .await
        .unwrap();

    let related = BlogPostRepo::list_related(&pool, "AI", main.id, 3).await.unwrap();
    let ids: Vec<_> = related.iter().map(|p| p.id).collect();
    assert_eq!(ids, [undated.id, newer.id, older.id]);
}
