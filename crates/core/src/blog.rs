//! Public blog listing: ordering, search/category filtering and the
//! featured / recent / more split used by the `/blog` page.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Number of posts shown in the "Recent posts" column next to the featured post.
pub const RECENT_POSTS: usize = 6;

/// Maximum number of related posts shown under an article.
pub const RELATED_POSTS_LIMIT: i64 = 3;

/// Read access to the fields the listing logic needs.
pub trait BlogEntry {
    fn title(&self) -> &str;
    fn excerpt(&self) -> &str;
    fn content(&self) -> &str;
    fn category(&self) -> &str;
    /// Date the post is ordered by: publication date, else creation date.
    fn sort_date(&self) -> Timestamp;
}

/// Query parameters accepted by the blog listing (`?search=&category=`).
///
/// Empty strings are treated the same as absent parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl ListingFilter {
    fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    fn search(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether `entry` passes both filters.
    ///
    /// Category is an exact match; search is a case-insensitive substring
    /// match over title, excerpt and content.
    pub fn matches<E: BlogEntry>(&self, entry: &E) -> bool {
        if let Some(category) = self.category() {
            if entry.category() != category {
                return false;
            }
        }
        match self.search() {
            Some(needle) => {
                entry.title().to_lowercase().contains(&needle)
                    || entry.excerpt().to_lowercase().contains(&needle)
                    || entry.content().to_lowercase().contains(&needle)
            }
            None => true,
        }
    }
}

/// The `/blog` page layout: one featured post, a recent column, then the rest.
#[derive(Debug, Serialize)]
pub struct Listing<T: Serialize> {
    pub featured: Option<T>,
    pub recent: Vec<T>,
    pub more: Vec<T>,
    /// Number of posts that matched the filter.
    pub total: usize,
}

impl<T: Serialize> Listing<T> {
    /// Apply `f` to every post in the layout.
    pub fn map<U: Serialize>(self, mut f: impl FnMut(T) -> U) -> Listing<U> {
        Listing {
            featured: self.featured.map(&mut f),
            recent: self.recent.into_iter().map(&mut f).collect(),
            more: self.more.into_iter().map(&mut f).collect(),
            total: self.total,
        }
    }
}

/// Sort newest first by [`BlogEntry::sort_date`]. Stable for equal dates.
pub fn sort_newest_first<E: BlogEntry>(posts: &mut [E]) {
    posts.sort_by_key(|p| std::cmp::Reverse(p.sort_date()));
}

/// Filter, order and split published posts into the page layout.
pub fn build_listing<E: BlogEntry + Serialize>(
    mut posts: Vec<E>,
    filter: &ListingFilter,
) -> Listing<E> {
    posts.retain(|p| filter.matches(p));
    sort_newest_first(&mut posts);

    let total = posts.len();
    let mut iter = posts.into_iter();
    let featured = iter.next();
    let recent: Vec<E> = iter.by_ref().take(RECENT_POSTS).collect();
    let more: Vec<E> = iter.collect();

    Listing {
        featured,
        recent,
        more,
        total,
    }
}

/// Distinct categories, sorted alphabetically, for the category dropdown.
pub fn categories<E: BlogEntry>(posts: &[E]) -> Vec<String> {
    let mut cats: Vec<String> = posts.iter().map(|p| p.category().to_string()).collect();
    cats.sort();
    cats.dedup();
    cats
}
