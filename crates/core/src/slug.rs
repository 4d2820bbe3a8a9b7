//! URL slug derivation and collision-free allocation for blog posts.
//!
//! [`normalize`] turns a human-entered title into a URL-safe slug.
//! [`allocate_unique`] probes storage through the [`SlugLookup`] port and
//! appends `-1`, `-2`, ... until it finds a slug no other post holds.
//!
//! The probe is an optimistic pre-check only. The `uq_blog_posts_slug`
//! constraint is the final arbiter; callers retry allocation when a write
//! hits it (see [`SLUG_CONFLICT_RETRIES`]).

use std::future::Future;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Extra allocate-and-write rounds a handler performs after the database
/// rejects a slug that a concurrent request claimed first.
pub const SLUG_CONFLICT_RETRIES: usize = 3;

/// Name of the unique constraint guarding `blog_posts.slug`.
pub const SLUG_CONSTRAINT: &str = "uq_blog_posts_slug";

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Anything that is not an ASCII word character or a hyphen.
static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\-]+").expect("valid regex"));

static HYPHEN_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("valid regex"));

/// Derive a URL-safe slug from arbitrary text.
///
/// Steps, in order: lowercase, trim, whitespace runs to `-`, strip
/// everything outside `[a-z0-9_-]`, collapse `--+` to `-`, strip leading and
/// trailing `-`. Non-ASCII letters are dropped rather than transliterated.
///
/// # Examples
///
/// ```
/// use medora_core::slug::normalize;
///
/// assert_eq!(normalize("Hello, World!"), "hello-world");
/// assert_eq!(normalize("  Multiple   Spaces  "), "multiple-spaces");
/// assert_eq!(normalize("Café Con Leche"), "caf-con-leche");
/// assert_eq!(normalize("!!!"), "");
/// ```
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = WHITESPACE_RE.replace_all(lowered.trim(), "-");
    let stripped = NON_WORD_RE.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN_RE.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

/// Normalize `text` and reject the result when nothing URL-safe is left.
///
/// A title made only of punctuation or non-ASCII letters would otherwise
/// produce an empty slug and an unreachable `/blog/` path.
pub fn require_slug(text: &str) -> Result<String, CoreError> {
    let slug = normalize(text);
    if slug.is_empty() {
        return Err(CoreError::Validation(format!(
            "Slug derived from '{text}' is empty; use at least one ASCII letter or digit"
        )));
    }
    Ok(slug)
}

/// Storage port used by [`allocate_unique`] for its uniqueness probes.
///
/// Implementations return the slug stored by the post that holds `slug`,
/// or `None` when no post does.
pub trait SlugLookup: Send + Sync {
    /// Error raised by the underlying store (connectivity loss, etc.).
    type Error;

    /// Look up the post currently holding `slug`.
    fn find_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send;
}

/// Allocate a slug derived from `base_slug` that no other post holds.
///
/// `current_slug` is the slug the post being edited already owns; a
/// collision with it is not a collision. Creates pass `None`.
///
/// Issues one read-only lookup per attempt and loops until a free slug is
/// found. Lookup errors propagate unchanged.
pub async fn allocate_unique<L: SlugLookup>(
    lookup: &L,
    base_slug: &str,
    current_slug: Option<&str>,
) -> Result<String, L::Error> {
    let mut candidate = base_slug.to_string();
    let mut counter: u64 = 1;

    loop {
        match lookup.find_slug(&candidate).await? {
            None => return Ok(candidate),
            Some(existing) if Some(existing.as_str()) == current_slug => return Ok(candidate),
            Some(_) => {
                candidate = format!("{base_slug}-{counter}");
                counter += 1;
            }
        }
    }
}
