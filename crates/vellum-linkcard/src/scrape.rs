//! `<meta>` tag scraping over fetched markup.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

/// Metadata scraped from a page's `<meta>` tags.
///
/// Fields are empty strings when no matching tag was found.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScrapedMeta {
    /// Page title (e.g., `og:title` or `twitter:title`).
    pub title: String,
    /// Page description.
    pub description: String,
    /// Preview image URL.
    pub image: String,
}

impl ScrapedMeta {
    fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty() && !self.image.is_empty()
    }
}

/// Scan markup for `<meta>` elements and extract title, description, and
/// image values.
///
/// A meta tag matches a field when its `property` or `name` attribute
/// contains (case-insensitive) `title`, `description`, or `image`; the
/// `content` attribute supplies the value. The first match per field wins,
/// later matches are ignored.
///
/// Real pages are rarely well-formed XML, so the scan is tolerant: the
/// reader runs with end-name checking disabled and stops at the first
/// unrecoverable parse error, keeping whatever was found up to that point.
#[must_use]
pub fn scrape_meta(markup: &str) -> ScrapedMeta {
    let mut reader = Reader::from_str(markup);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut meta = ScrapedMeta::default();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e) | Event::Empty(e)) => {
                if e.name().as_ref().eq_ignore_ascii_case(b"meta") {
                    apply_meta_tag(&e, &mut meta);
                    if meta.is_complete() {
                        break;
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            // Tag soup the reader cannot recover from; keep what we have.
            Err(_) => break,
        }
    }
    meta
}

/// Fill empty fields of `meta` from one `<meta>` element.
fn apply_meta_tag(element: &BytesStart<'_>, meta: &mut ScrapedMeta) {
    let mut key = String::new();
    let mut content = String::new();

    for attr in element.attributes().with_checks(false).flatten() {
        let attr_name = attr.key.as_ref().to_ascii_lowercase();
        match attr_name.as_slice() {
            b"property" | b"name" if key.is_empty() => {
                key = String::from_utf8_lossy(&attr.value).to_lowercase();
            }
            b"content" => {
                content = String::from_utf8_lossy(&attr.value).into_owned();
            }
            _ => {}
        }
    }

    if content.is_empty() {
        return;
    }
    if meta.title.is_empty() && key.contains("title") {
        meta.title = content;
    } else if meta.description.is_empty() && key.contains("description") {
        meta.description = content;
    } else if meta.image.is_empty() && key.contains("image") {
        meta.image = content;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_scrape_open_graph_tags() {
        let html = r#"<html><head>
            <meta property="og:title" content="A Page"/>
            <meta property="og:description" content="About the page"/>
            <meta property="og:image" content="https://example.com/img.png"/>
        </head><body></body></html>"#;

        let meta = scrape_meta(html);
        assert_eq!(meta.title, "A Page");
        assert_eq!(meta.description, "About the page");
        assert_eq!(meta.image, "https://example.com/img.png");
    }

    #[test]
    fn test_scrape_name_attribute() {
        let html = r#"<head>
            <meta name="twitter:title" content="Named Title"/>
            <meta name="description" content="Plain description"/>
        </head>"#;

        let meta = scrape_meta(html);
        assert_eq!(meta.title, "Named Title");
        assert_eq!(meta.description, "Plain description");
        assert_eq!(meta.image, "");
    }

    #[test]
    fn test_first_match_wins() {
        let html = r#"<head>
            <meta property="og:title" content="First"/>
            <meta property="og:title" content="Second"/>
            <meta name="twitter:title" content="Third"/>
        </head>"#;

        let meta = scrape_meta(html);
        assert_eq!(meta.title, "First");
    }

    #[test]
    fn test_case_insensitive_property_match() {
        let html = r#"<meta property="OG:Image" content="https://example.com/a.jpg"/>"#;
        assert_eq!(scrape_meta(html).image, "https://example.com/a.jpg");
    }

    #[test]
    fn test_unclosed_meta_tags_tolerated() {
        // Plain HTML meta tags are not self-closing.
        let html = r#"<head>
            <meta property="og:title" content="Unclosed">
            <meta property="og:description" content="Still found">
        </head>"#;

        let meta = scrape_meta(html);
        assert_eq!(meta.title, "Unclosed");
        assert_eq!(meta.description, "Still found");
    }

    #[test]
    fn test_empty_content_ignored() {
        let html = r#"<head>
            <meta property="og:title" content=""/>
            <meta property="og:title" content="Fallback"/>
        </head>"#;
        assert_eq!(scrape_meta(html).title, "Fallback");
    }

    #[test]
    fn test_no_meta_tags() {
        assert_eq!(scrape_meta("<html><body>hi</body></html>"), ScrapedMeta::default());
    }
}
