//! Reading-time estimate shown on blog cards and article headers.

/// Average adult reading speed used for the estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimated minutes needed to read `content`, rounded up.
///
/// Blank content still counts as one word, so every post reads in at
/// least one minute.
///
/// ```
/// use medora_core::reading_time::reading_time_mins;
///
/// assert_eq!(reading_time_mins(""), 1);
/// assert_eq!(reading_time_mins(&"word ".repeat(201)), 2);
/// ```
pub fn reading_time_mins(content: &str) -> u32 {
    let words = content.split_whitespace().count().max(1);
    words.div_ceil(WORDS_PER_MINUTE) as u32
}
