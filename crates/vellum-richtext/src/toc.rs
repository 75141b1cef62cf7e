//! Table-of-contents extraction.

use crate::anchor::heading_anchor;
use crate::node::Node;

/// One table-of-contents entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading level (2-6).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Content-derived anchor, identical to the one the renderer emits.
    pub anchor: String,
}

/// Collect table-of-contents entries from a document's headings.
///
/// Only headings whose first child is a text run appear; the anchor uses
/// the same content hash as the renderer so in-page deep links line up.
#[must_use]
pub fn table_of_contents(document: &Node) -> Vec<TocEntry> {
    document
        .content()
        .iter()
        .filter_map(|node| {
            let Node::Heading { level, content } = node else {
                return None;
            };
            let Some(Node::Text { value, .. }) = content.first() else {
                return None;
            };
            Some(TocEntry {
                level: *level,
                title: value.clone(),
                anchor: heading_anchor(value),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::render::{RenderContext, render};

    fn text(value: &str) -> serde_json::Value {
        json!({"nodeType": "text", "value": value, "marks": []})
    }

    #[test]
    fn test_collects_headings_in_order() {
        let document = Node::document_from_json(&json!({
            "nodeType": "document",
            "content": [
                {"nodeType": "heading-2", "content": [text("First")]},
                {"nodeType": "paragraph", "content": [text("body")]},
                {"nodeType": "heading-3", "content": [text("Second")]},
            ],
        }));

        let toc = table_of_contents(&document);
        assert_eq!(toc.len(), 2);
        assert_eq!((toc[0].level, toc[0].title.as_str()), (2, "First"));
        assert_eq!((toc[1].level, toc[1].title.as_str()), (3, "Second"));
    }

    #[test]
    fn test_skips_headings_without_text() {
        let document = Node::document_from_json(&json!({
            "nodeType": "document",
            "content": [{"nodeType": "heading-2", "content": []}],
        }));

        assert_eq!(table_of_contents(&document), vec![]);
    }

    #[test]
    fn test_anchors_match_rendered_ids() {
        let document = Node::document_from_json(&json!({
            "nodeType": "document",
            "content": [{"nodeType": "heading-4", "content": [text("Deep link")]}],
        }));

        let toc = table_of_contents(&document);
        let html = render(&document, &RenderContext::new(""));
        assert!(html.contains(&format!(r#"id="{}""#, toc[0].anchor)));
    }
}
