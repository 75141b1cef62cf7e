//! Rich-document model and HTML renderer.
//!
//! A rich document is the structured tree a headless CMS returns for
//! formatted article bodies: block nodes (headings, paragraphs, embedded
//! assets and entries) holding inline nodes (hyperlinks, inline embeds,
//! text runs with marks).
//!
//! [`Node::document_from_json`] types raw CMS JSON into the tree without
//! trusting it: misplaced or unknown nodes degrade to children, embedded
//! targets are validated into optional structures, and nothing panics on
//! partial payloads. [`render`] then walks the tree into HTML, assigning
//! each heading a stable content-derived anchor so in-page links survive
//! re-generation.
//!
//! # Example
//!
//! ```
//! use vellum_richtext::{Node, RenderContext, render};
//!
//! let raw = serde_json::json!({
//!     "nodeType": "document",
//!     "content": [{
//!         "nodeType": "heading-2",
//!         "content": [{"nodeType": "text", "value": "Intro", "marks": []}],
//!     }],
//! });
//! let document = Node::document_from_json(&raw);
//! let html = render(&document, &RenderContext::new("https://example.com/default.png"));
//! assert!(html.starts_with("<h2 id=\""));
//! ```

mod anchor;
mod date;
mod escape;
mod markdown;
mod node;
mod render;
mod toc;

pub use anchor::heading_anchor;
pub use date::format_jst;
pub use escape::escape_html;
pub use markdown::render_markdown;
pub use node::{AssetTarget, EntryTarget, Mark, Node};
pub use render::{CategoryRef, RenderContext, render};
pub use toc::{TocEntry, table_of_contents};
