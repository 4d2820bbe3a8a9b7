//! Markdown rendering for blog post bodies.

use pulldown_cmark::{html, Options, Parser};

/// Render GitHub-flavoured markdown to an HTML fragment.
///
/// Raw HTML in the source is passed through; post content is only ever
/// written by authenticated admins.
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}
