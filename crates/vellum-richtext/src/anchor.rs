//! Content-derived heading anchors.

use sha2::{Digest, Sha256};

/// Compute the anchor identifier for a heading's text content.
///
/// The anchor is the hex-encoded SHA-256 of the text value, so it depends
/// on nothing but the content itself: the same heading text yields the
/// same anchor across renders, sibling positions, and pages.
#[must_use]
pub fn heading_anchor(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_is_deterministic() {
        assert_eq!(heading_anchor("見出し"), heading_anchor("見出し"));
    }

    #[test]
    fn test_anchor_depends_on_content_only() {
        assert_ne!(heading_anchor("Setup"), heading_anchor("Teardown"));
    }

    #[test]
    fn test_anchor_is_hex() {
        let anchor = heading_anchor("Intro");
        assert_eq!(anchor.len(), 64);
        assert!(anchor.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
