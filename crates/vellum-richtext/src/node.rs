//! Typed rich-document tree and parse-don't-trust typing of raw CMS JSON.
//!
//! The CMS schema is not statically enforced at this boundary: embedded
//! targets arrive as loosely shaped JSON and may be partially resolved.
//! Typing never fails; anything malformed degrades to [`Node::Unknown`]
//! (rendered as its children) or to a `None` target.

use serde_json::Value;

/// Formatting mark on a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Bold (`<strong>`).
    Bold,
    /// Italic (`<em>`).
    Italic,
    /// Underline (`<u>`).
    Underline,
    /// Inline code (`<code>`).
    Code,
}

impl Mark {
    fn from_json(value: &Value) -> Option<Self> {
        match value.get("type").and_then(Value::as_str)? {
            "bold" => Some(Self::Bold),
            "italic" => Some(Self::Italic),
            "underline" => Some(Self::Underline),
            "code" => Some(Self::Code),
            _ => None,
        }
    }
}

/// Validated target of an embedded asset block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTarget {
    /// Image URL (possibly protocol-relative, as delivered by the CMS).
    pub url: String,
    /// Recorded image width in pixels.
    pub width: Option<u32>,
    /// Recorded image height in pixels.
    pub height: Option<u32>,
    /// Asset title, used as alt text.
    pub title: String,
    /// Asset description, used as the caption when non-empty.
    pub description: String,
}

impl AssetTarget {
    /// Validate a raw embed target. Requires a file URL; everything else
    /// is optional.
    fn from_json(target: &Value) -> Option<Self> {
        let url = target
            .pointer("/fields/file/url")
            .and_then(Value::as_str)?
            .to_owned();
        let dimension = |name: &str| {
            target
                .pointer(&format!("/fields/file/details/image/{name}"))
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
        };
        Some(Self {
            url,
            width: dimension("width"),
            height: dimension("height"),
            title: str_field(target, "/fields/title"),
            description: str_field(target, "/fields/description"),
        })
    }
}

/// Validated target of an embedded entry (block or inline cross-link).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTarget {
    /// Target entry title.
    pub title: String,
    /// Target entry slug, the final href segment.
    pub slug: String,
    /// Category entry id, resolved to a path through the render context.
    ///
    /// Read from the raw link stub, so it survives unresolved category
    /// links.
    pub category_id: Option<String>,
    /// Thumbnail image URL when the linked asset resolved.
    pub thumbnail_url: Option<String>,
    /// Entry creation timestamp (RFC 3339) when present.
    pub created_at: Option<String>,
}

impl EntryTarget {
    /// Validate a raw embed target. Requires a slug; everything else is
    /// optional.
    fn from_json(target: &Value) -> Option<Self> {
        let slug = target
            .pointer("/fields/slug")
            .and_then(Value::as_str)?
            .to_owned();
        Some(Self {
            title: str_field(target, "/fields/title"),
            slug,
            category_id: target
                .pointer("/fields/category/sys/id")
                .and_then(Value::as_str)
                .map(str::to_owned),
            thumbnail_url: target
                .pointer("/fields/thumbnail/fields/file/url")
                .and_then(Value::as_str)
                .map(str::to_owned),
            created_at: target
                .pointer("/sys/createdAt")
                .and_then(Value::as_str)
                .map(str::to_owned),
        })
    }
}

fn str_field(value: &Value, pointer: &str) -> String {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// A node of the rich-document tree.
///
/// Children are homogeneous with respect to the parent's allowed-child
/// schema: the document holds blocks only; headings, paragraphs, and
/// hyperlinks hold inline-or-text children.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Document root holding block nodes.
    Document {
        /// Block children.
        content: Vec<Node>,
    },
    /// Heading, levels 2-6.
    Heading {
        /// Heading level (2-6).
        level: u8,
        /// Inline children.
        content: Vec<Node>,
    },
    /// Paragraph of inline children.
    Paragraph {
        /// Inline children.
        content: Vec<Node>,
    },
    /// Embedded asset block (image with optional caption).
    EmbeddedAsset {
        /// Validated target; `None` when the embed did not resolve.
        target: Option<AssetTarget>,
    },
    /// Embedded entry block, rendered as a compact article card.
    EmbeddedEntry {
        /// Validated target; `None` when the embed did not resolve.
        target: Option<EntryTarget>,
    },
    /// Embedded entry inline, rendered as a plain text link.
    EmbeddedEntryInline {
        /// Validated target; `None` when the embed did not resolve.
        target: Option<EntryTarget>,
    },
    /// Hyperlink with a URI and inline children.
    Hyperlink {
        /// Link target URI.
        uri: String,
        /// Inline children (link text).
        content: Vec<Node>,
    },
    /// Text run with marks.
    Text {
        /// Literal text value.
        value: String,
        /// Formatting marks, applied in order.
        marks: Vec<Mark>,
    },
    /// Unrecognized or misplaced node; renders as its children.
    Unknown {
        /// Salvaged children.
        content: Vec<Node>,
    },
}

impl Node {
    /// Type a raw CMS rich document.
    ///
    /// Always returns [`Node::Document`]; a payload that is not a document
    /// yields an empty one.
    #[must_use]
    pub fn document_from_json(value: &Value) -> Self {
        let content = if node_type(value) == "document" {
            children(value).map(Self::block_from_json).collect()
        } else {
            Vec::new()
        };
        Self::Document { content }
    }

    /// Type one block-position node.
    fn block_from_json(value: &Value) -> Self {
        match node_type(value) {
            "heading-2" => Self::heading(2, value),
            "heading-3" => Self::heading(3, value),
            "heading-4" => Self::heading(4, value),
            "heading-5" => Self::heading(5, value),
            "heading-6" => Self::heading(6, value),
            "paragraph" => Self::Paragraph {
                content: children(value).map(Self::inline_from_json).collect(),
            },
            "embedded-asset-block" => Self::EmbeddedAsset {
                target: value
                    .pointer("/data/target")
                    .and_then(AssetTarget::from_json),
            },
            "embedded-entry-block" => Self::EmbeddedEntry {
                target: value
                    .pointer("/data/target")
                    .and_then(EntryTarget::from_json),
            },
            // Inline or unknown node in block position: salvage children.
            _ => Self::Unknown {
                content: children(value).map(Self::inline_from_json).collect(),
            },
        }
    }

    /// Type one inline-position node.
    fn inline_from_json(value: &Value) -> Self {
        match node_type(value) {
            "text" => Self::Text {
                value: str_field(value, "/value"),
                marks: value
                    .get("marks")
                    .and_then(Value::as_array)
                    .map(|marks| marks.iter().filter_map(Mark::from_json).collect())
                    .unwrap_or_default(),
            },
            "hyperlink" => Self::Hyperlink {
                uri: str_field(value, "/data/uri"),
                content: children(value).map(Self::inline_from_json).collect(),
            },
            "embedded-entry-inline" => Self::EmbeddedEntryInline {
                target: value
                    .pointer("/data/target")
                    .and_then(EntryTarget::from_json),
            },
            _ => Self::Unknown {
                content: children(value).map(Self::inline_from_json).collect(),
            },
        }
    }

    fn heading(level: u8, value: &Value) -> Self {
        Self::Heading {
            level,
            content: children(value).map(Self::inline_from_json).collect(),
        }
    }

    /// The node's ordered children, empty for leaf nodes.
    #[must_use]
    pub fn content(&self) -> &[Node] {
        match self {
            Self::Document { content }
            | Self::Heading { content, .. }
            | Self::Paragraph { content }
            | Self::Hyperlink { content, .. }
            | Self::Unknown { content } => content,
            Self::EmbeddedAsset { .. }
            | Self::EmbeddedEntry { .. }
            | Self::EmbeddedEntryInline { .. }
            | Self::Text { .. } => &[],
        }
    }
}

fn node_type(value: &Value) -> &str {
    value.get("nodeType").and_then(Value::as_str).unwrap_or("")
}

fn children(value: &Value) -> impl Iterator<Item = &Value> {
    value
        .get("content")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
}
