//! Marketplace product-image fallback.
//!
//! Some marketplace pages expose no scrapeable image metadata, but their
//! URLs carry a 10-character alphanumeric product identifier from which a
//! product-image URL can be synthesized.

use std::sync::LazyLock;

use regex::Regex;

/// Hosts the fallback applies to.
static MARKETPLACE_HOST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://(?:[^/]+\.)?(?:amazon|amzn)\.[^/]+/").unwrap());

/// A path segment of exactly 10 alphanumeric characters.
static PRODUCT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/([0-9A-Za-z]{10})(?:[/?#]|$)").unwrap());

/// Synthesize a product-image URL for a marketplace link.
///
/// Returns `None` when the host is not a marketplace host or the path
/// carries no product identifier.
#[must_use]
pub fn marketplace_image_url(url: &str) -> Option<String> {
    if !MARKETPLACE_HOST_RE.is_match(url) {
        return None;
    }
    let id = PRODUCT_ID_RE.captures(url)?.get(1)?.as_str();
    Some(format!(
        "https://images-na.ssl-images-amazon.com/images/P/{id}.09.LZZZZZZZ.jpg"
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_product_url_synthesizes_image() {
        let url = "https://www.amazon.co.jp/dp/B08N5WRWNW?ref=nav";
        assert_eq!(
            marketplace_image_url(url).as_deref(),
            Some("https://images-na.ssl-images-amazon.com/images/P/B08N5WRWNW.09.LZZZZZZZ.jpg")
        );
    }

    #[test]
    fn test_short_link_host() {
        let url = "https://amzn.asia/d/0abcDEF123";
        assert_eq!(
            marketplace_image_url(url).as_deref(),
            Some("https://images-na.ssl-images-amazon.com/images/P/0abcDEF123.09.LZZZZZZZ.jpg")
        );
    }

    #[test]
    fn test_non_marketplace_host_ignored() {
        assert_eq!(marketplace_image_url("https://example.com/dp/B08N5WRWNW"), None);
    }

    #[test]
    fn test_no_product_id_in_path() {
        assert_eq!(marketplace_image_url("https://www.amazon.co.jp/gp/bestsellers"), None);
    }

    #[test]
    fn test_longer_segment_not_matched() {
        // Eleven characters is not a product id.
        assert_eq!(
            marketplace_image_url("https://www.amazon.co.jp/dp/B08N5WRWNW1"),
            None
        );
    }
}
