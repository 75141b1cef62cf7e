//! Outbound URL discovery over a serialized rich document.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Matches hyperlink `"uri"` fields and whole-value text-run `"value"`
/// fields in the serialized document. The value must run from the opening
/// quote to the closing quote, so text runs that merely mention a URL
/// mid-sentence are not picked up.
static URL_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(?:uri|value)"\s*:\s*"(https?://[^"\s\\]+)""#).unwrap()
});

/// Extract every distinct outbound URL from a serialized document.
///
/// URLs are returned in lexicographic order; each appears exactly once
/// regardless of how many times the document references it.
#[must_use]
pub fn discover_urls(document_json: &str) -> Vec<String> {
    let urls: BTreeSet<String> = URL_FIELD_RE
        .captures_iter(document_json)
        .map(|caps| caps[1].to_owned())
        .collect();
    urls.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_discover_uri_fields() {
        let json = r#"{"nodeType":"hyperlink","data":{"uri":"https://example.com/a"},"content":[]}"#;
        assert_eq!(discover_urls(json), vec!["https://example.com/a"]);
    }

    #[test]
    fn test_discover_whole_value_text_runs() {
        let json = r#"{"nodeType":"text","value":"https://example.com/b","marks":[]}"#;
        assert_eq!(discover_urls(json), vec!["https://example.com/b"]);
    }

    #[test]
    fn test_mid_sentence_url_not_discovered() {
        let json = r#"{"nodeType":"text","value":"see https://example.com/c for details"}"#;
        assert_eq!(discover_urls(json), Vec::<String>::new());
    }

    #[test]
    fn test_deduplicates() {
        let json = r#"
            {"uri":"https://example.com/x"}
            {"value":"https://example.com/x"}
            {"uri":"https://example.com/y"}
        "#;
        assert_eq!(
            discover_urls(json),
            vec!["https://example.com/x", "https://example.com/y"]
        );
    }

    #[test]
    fn test_tolerates_surrounding_whitespace() {
        let json = r#"{ "uri" : "http://example.com/spaced" }"#;
        assert_eq!(discover_urls(json), vec!["http://example.com/spaced"]);
    }

    #[test]
    fn test_non_http_schemes_ignored() {
        let json = r#"{"uri":"mailto:someone@example.com"}"#;
        assert_eq!(discover_urls(json), Vec::<String>::new());
    }
}
