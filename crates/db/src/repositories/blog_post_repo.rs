//! Repository for the `blog_posts` table.

use medora_core::slug::{SlugLookup, SLUG_CONSTRAINT};
use medora_core::types::DbId;
use sqlx::PgPool;

use crate::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, title, excerpt, content, category, author, cover_image, \
                       published, published_at, created_at, updated_at";

/// Provides CRUD and listing queries for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Insert a new post under an already allocated `slug`.
    ///
    /// `published` defaults to `TRUE` and `published_at` to `NOW()`; a blank
    /// `cover_image` is stored as `NULL`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBlogPost,
        slug: &str,
    ) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts
                (slug, title, excerpt, content, category, author, cover_image, published, published_at)
             VALUES ($1, $2, $3, $4, $5, $6, NULLIF($7, ''), COALESCE($8, TRUE), COALESCE($9, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.category)
            .bind(&input.author)
            .bind(&input.cover_image)
            .bind(input.published)
            .bind(input.published_at)
            .fetch_one(pool)
            .await
    }

    /// Find a post by its internal ID, regardless of publish state.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE id = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a post by slug, regardless of publish state.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE slug = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find a published post by slug. Drafts are invisible to the public site.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE slug = $1 AND published");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List every post, drafts included, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts ORDER BY created_at DESC");
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    /// List published posts, newest publication (or creation) date first.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts
             WHERE published
             ORDER BY COALESCE(published_at, created_at) DESC, id DESC"
        );
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    /// Published posts in `category` other than `exclude_id`, newest first.
    /// Posts without a publication date sort ahead of dated ones.
    pub async fn list_related(
        pool: &PgPool,
        category: &str,
        exclude_id: DbId,
        limit: i64,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts
             WHERE published AND category = $1 AND id <> $2
             ORDER BY published_at DESC, id DESC
             LIMIT $3"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(category)
            .bind(exclude_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Distinct categories of published posts, alphabetically.
    pub async fn published_categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT DISTINCT category FROM blog_posts WHERE published ORDER BY category",
        )
        .fetch_all(pool)
        .await
    }

    /// Apply a patch and write `slug` (already allocated, or the stored one).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlogPost,
        slug: &str,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET
                slug = $2,
                title = COALESCE($3, title),
                excerpt = COALESCE($4, excerpt),
                content = COALESCE($5, content),
                category = COALESCE($6, category),
                author = COALESCE($7, author),
                cover_image = CASE WHEN $8::TEXT IS NULL THEN cover_image ELSE NULLIF($8, '') END,
                published = COALESCE($9, published),
                published_at = COALESCE($10, published_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.category)
            .bind(&input.author)
            .bind(&input.cover_image)
            .bind(input.published)
            .bind(input.published_at)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a post by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Whether `err` is a unique violation on the post slug constraint, i.e. a
/// concurrent writer claimed the slug between allocation and write.
pub fn is_slug_conflict(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some(SLUG_CONSTRAINT)
        }
        _ => false,
    }
}

/// [`SlugLookup`] backed by the `blog_posts` table.
#[derive(Clone, Copy)]
pub struct PgSlugLookup<'a>(pub &'a PgPool);

impl SlugLookup for PgSlugLookup<'_> {
    type Error = sqlx::Error;

    async fn find_slug(&self, slug: &str) -> Result<Option<String>, Self::Error> {
        tracing::trace!(slug, "Probing slug");
        sqlx::query_scalar("SELECT slug FROM blog_posts WHERE slug = $1")
            .bind(slug)
            .fetch_optional(self.0)
            .await
    }
}
