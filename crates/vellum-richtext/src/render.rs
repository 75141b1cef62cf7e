//! HTML rendering of rich-document trees.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;
use vellum_linkcard::LinkMetadata;

use crate::anchor::heading_anchor;
use crate::escape::escape_html;
use crate::node::{Mark, Node};

/// Paragraph passthrough trigger for pasted embed snippets.
///
/// Exactly this shape bypasses escaping; it is a narrow workaround for
/// embeds the CMS cannot represent, not a general raw-HTML feature.
static IFRAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<iframe\s+[^>]*src="([^"]*)"[^>]*>(?:</iframe>)?"#).unwrap()
});

/// Video short-link pattern; the capture is the video identifier.
static VIDEO_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/youtu\.be/(.+)$").unwrap());

/// Category lookup entry: the path and display title a category id maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRef {
    /// Category page path, e.g. `/rust`.
    pub path: String,
    /// Category display title.
    pub title: String,
}

/// Everything the renderer needs besides the document itself.
///
/// All inputs are supplied by the calling page template; the renderer
/// holds no state of its own and output depends only on document plus
/// context.
pub struct RenderContext {
    /// Category id to path/title map for embedded entry cross-links.
    pub categories: BTreeMap<String, CategoryRef>,
    /// Placeholder image for cards whose target has no thumbnail.
    pub default_thumbnail_url: String,
    /// Enriched link metadata keyed by URL.
    pub links_by_url: BTreeMap<String, LinkMetadata>,
    /// Heading anchor function; content-addressed by default.
    pub anchor: fn(&str) -> String,
}

impl RenderContext {
    /// Context with the default content-hash anchor function and no
    /// category or link data.
    #[must_use]
    pub fn new(default_thumbnail_url: &str) -> Self {
        Self {
            categories: BTreeMap::new(),
            default_thumbnail_url: default_thumbnail_url.to_owned(),
            links_by_url: BTreeMap::new(),
            anchor: heading_anchor,
        }
    }

    /// Attach a category map.
    #[must_use]
    pub fn with_categories(mut self, categories: BTreeMap<String, CategoryRef>) -> Self {
        self.categories = categories;
        self
    }

    /// Attach enriched link metadata.
    #[must_use]
    pub fn with_links(mut self, links_by_url: BTreeMap<String, LinkMetadata>) -> Self {
        self.links_by_url = links_by_url;
        self
    }

    /// Compose an entry href from a category id and slug.
    ///
    /// An unknown category id yields an href without the category segment.
    fn entry_href(&self, category_id: Option<&str>, slug: &str) -> String {
        let category_path = category_id
            .and_then(|id| self.categories.get(id))
            .map(|category| category.path.as_str())
            .unwrap_or_default();
        format!("{category_path}/{slug}")
    }
}

/// Render a rich document to HTML.
///
/// Pure and deterministic: the same document and context yield
/// byte-identical markup. Nodes with missing data degrade to omitting the
/// unavailable piece; rendering never fails.
#[must_use]
pub fn render(document: &Node, context: &RenderContext) -> String {
    let mut out = String::with_capacity(4096);
    for node in document.content() {
        render_node(node, context, &mut out);
    }
    out
}

fn render_children(nodes: &[Node], context: &RenderContext, out: &mut String) {
    for node in nodes {
        render_node(node, context, out);
    }
}

fn render_node(node: &Node, context: &RenderContext, out: &mut String) {
    match node {
        Node::Document { content } | Node::Unknown { content } => {
            render_children(content, context, out);
        }
        Node::Heading { level, content } => render_heading(*level, content, context, out),
        Node::Paragraph { content } => render_paragraph(content, context, out),
        Node::EmbeddedAsset { target } => {
            if let Some(target) = target {
                render_asset(target, out);
            }
        }
        Node::EmbeddedEntry { target } => {
            if let Some(target) = target {
                render_entry_card(target, context, out);
            }
        }
        Node::EmbeddedEntryInline { target } => {
            if let Some(target) = target {
                let href = context.entry_href(target.category_id.as_deref(), &target.slug);
                let _ = write!(
                    out,
                    r#"<a href="{}">{}</a>"#,
                    escape_html(&href),
                    escape_html(&target.title)
                );
            }
        }
        Node::Hyperlink { uri, content } => render_hyperlink(uri, content, context, out),
        Node::Text { value, marks } => render_text(value, marks, out),
    }
}

/// Headings carry a content-derived anchor when their first child is a
/// text run; otherwise the children are emitted without a heading element.
fn render_heading(level: u8, content: &[Node], context: &RenderContext, out: &mut String) {
    if let Some(Node::Text { value, .. }) = content.first() {
        let anchor = (context.anchor)(value);
        let _ = write!(out, r#"<h{level} id="{}">"#, escape_html(&anchor));
        render_children(content, context, out);
        let _ = write!(out, "</h{level}>");
    } else {
        render_children(content, context, out);
    }
}

fn render_paragraph(content: &[Node], context: &RenderContext, out: &mut String) {
    if let Some(Node::Text { value, marks }) = content.first() {
        if marks.contains(&Mark::Code) {
            out.push_str("<div><pre><code>");
            render_children(content, context, out);
            out.push_str("</code></pre></div>");
            return;
        }
        if IFRAME_RE.is_match(value) {
            // Narrow escaping bypass, see IFRAME_RE.
            out.push_str(value);
            return;
        }
        if value.is_empty() {
            render_children(content, context, out);
            return;
        }
        out.push_str("<p>");
        render_children(content, context, out);
        out.push_str("</p>");
    } else {
        render_children(content, context, out);
    }
}

fn render_asset(target: &crate::node::AssetTarget, out: &mut String) {
    out.push_str("<figure>");
    let _ = write!(out, r#"<img src="{}""#, escape_html(&with_scheme(&target.url)));
    if let Some(width) = target.width {
        let _ = write!(out, r#" width="{width}""#);
    }
    if let Some(height) = target.height {
        let _ = write!(out, r#" height="{height}""#);
    }
    let _ = write!(out, r#" alt="{}">"#, escape_html(&target.title));
    if !target.description.is_empty() {
        let _ = write!(
            out,
            "<figcaption>{}</figcaption>",
            escape_html(&target.description)
        );
    }
    out.push_str("</figure>");
}

fn render_entry_card(
    target: &crate::node::EntryTarget,
    context: &RenderContext,
    out: &mut String,
) {
    let href = context.entry_href(target.category_id.as_deref(), &target.slug);
    let image = target
        .thumbnail_url
        .as_deref()
        .map(with_scheme)
        .unwrap_or_else(|| context.default_thumbnail_url.clone());

    let _ = write!(out, r#"<a class="article-card" href="{}">"#, escape_html(&href));
    let _ = write!(
        out,
        r#"<img class="article-card-image" src="{}" alt="">"#,
        escape_html(&image)
    );
    let _ = write!(
        out,
        r#"<span class="article-card-title">{}</span>"#,
        escape_html(&target.title)
    );
    if let Some(date) = target.created_at.as_deref().and_then(crate::date::format_jst) {
        let _ = write!(out, "<time>{}</time>", escape_html(&date));
    }
    out.push_str("</a>");
}

fn render_hyperlink(uri: &str, content: &[Node], context: &RenderContext, out: &mut String) {
    if let Some(id) = VIDEO_LINK_RE
        .captures(uri)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    {
        let _ = write!(
            out,
            r#"<div class="video-embed"><iframe src="https://www.youtube.com/embed/{}" allowfullscreen></iframe></div>"#,
            escape_html(id)
        );
        return;
    }

    if let Some(link) = context.links_by_url.get(uri) {
        render_link_card(link, out);
        return;
    }

    let text = match content.first() {
        Some(Node::Text { value, .. }) if !value.is_empty() => value.as_str(),
        _ => uri,
    };
    let _ = write!(
        out,
        r#"<a href="{}" target="_blank" rel="noreferrer noopener">{}</a>"#,
        escape_html(uri),
        escape_html(text)
    );
}

fn render_link_card(link: &LinkMetadata, out: &mut String) {
    let _ = write!(
        out,
        r#"<a class="link-card" href="{}" target="_blank" rel="noreferrer noopener">"#,
        escape_html(&link.url)
    );
    if !link.image.is_empty() {
        let _ = write!(
            out,
            r#"<img class="link-card-image" src="{}" alt="">"#,
            escape_html(&link.image)
        );
    }
    let _ = write!(
        out,
        r#"<span class="link-card-title">{}</span>"#,
        escape_html(&link.title)
    );
    if !link.description.is_empty() {
        let _ = write!(
            out,
            r#"<span class="link-card-description">{}</span>"#,
            escape_html(&link.description)
        );
    }
    let _ = write!(
        out,
        r#"<span class="link-card-host">{}</span>"#,
        escape_html(hostname(&link.url))
    );
    out.push_str("</a>");
}

fn render_text(value: &str, marks: &[Mark], out: &mut String) {
    for mark in marks {
        out.push_str(mark_open(*mark));
    }
    out.push_str(&escape_html(value));
    for mark in marks.iter().rev() {
        out.push_str(mark_close(*mark));
    }
}

fn mark_open(mark: Mark) -> &'static str {
    match mark {
        Mark::Bold => "<strong>",
        Mark::Italic => "<em>",
        Mark::Underline => "<u>",
        Mark::Code => "<code>",
    }
}

fn mark_close(mark: Mark) -> &'static str {
    match mark {
        Mark::Bold => "</strong>",
        Mark::Italic => "</em>",
        Mark::Underline => "</u>",
        Mark::Code => "</code>",
    }
}

/// The CMS delivers protocol-relative asset URLs.
fn with_scheme(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url.to_owned()
    }
}

/// Hostname portion of a URL, for link-card attribution.
fn hostname(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.split(['/', '?', '#']).next().unwrap_or(rest)
}
