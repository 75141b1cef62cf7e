//! Markdown fallback rendering.
//!
//! Some articles carry a markdown body instead of a rich document; those
//! render through pulldown-cmark with the GFM option set.

use pulldown_cmark::{Options, Parser, html};

/// Render GFM markdown to HTML.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM;
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
