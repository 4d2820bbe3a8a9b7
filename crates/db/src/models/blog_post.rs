//! Blog post entity model and DTOs.

use medora_core::blog::BlogEntry;
use medora_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Markdown source.
    pub content: String,
    pub category: String,
    pub author: String,
    pub cover_image: Option<String>,
    pub published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BlogEntry for BlogPost {
    fn title(&self) -> &str {
        &self.title
    }

    fn excerpt(&self) -> &str {
        &self.excerpt
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn sort_date(&self) -> Timestamp {
        self.published_at.unwrap_or(self.created_at)
    }
}

/// DTO for creating a post from the admin editor.
///
/// `slug` falls back to the normalized title when absent or blank.
/// `published` defaults to `true` and `published_at` to now.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBlogPost {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    pub slug: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub excerpt: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub author: String,
    /// Blank strings are stored as `NULL`.
    pub cover_image: Option<String>,
    pub published: Option<bool>,
    pub published_at: Option<Timestamp>,
}

impl CreateBlogPost {
    /// The text the post's slug is derived from.
    pub fn slug_source(&self) -> &str {
        self.slug
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.title)
    }
}

/// DTO for patching a post. All fields are optional; absent fields keep
/// their stored value.
///
/// `cover_image: ""` clears the cover image.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBlogPost {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: Option<String>,
    pub slug: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub excerpt: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub author: Option<String>,
    pub cover_image: Option<String>,
    pub published: Option<bool>,
    pub published_at: Option<Timestamp>,
}

impl UpdateBlogPost {
    /// Whether the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.excerpt.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.author.is_none()
            && self.cover_image.is_none()
            && self.published.is_none()
            && self.published_at.is_none()
    }

    /// The text a new slug should be derived from, if the edit calls for one.
    ///
    /// An explicit slug that differs from `current` wins; otherwise a changed
    /// title triggers re-derivation. `None` means the stored slug is kept.
    pub fn slug_source<'a>(&'a self, current: &BlogPost) -> Option<&'a str> {
        let slug = self.slug.as_deref().filter(|s| !s.trim().is_empty());
        match (slug, self.title.as_deref()) {
            (Some(slug), _) if slug != current.slug => Some(slug),
            (Some(_), _) => None,
            (None, Some(title)) if title != current.title => Some(title),
            _ => None,
        }
    }
}
