//! Delivery API query builder.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left unescaped in query values.
///
/// `NON_ALPHANUMERIC` is stricter than necessary; unreserved marks are
/// kept readable.
const QUERY_ESCAPES: &percent_encoding::AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Builder for delivery API entry queries.
///
/// Accumulates query pairs in insertion order: content type, field
/// predicates, pagination, and sort options.
///
/// # Example
///
/// ```
/// use vellum_content::Query;
///
/// let query = Query::new()
///     .content_type("article")
///     .field_eq("fields.slug", "first-post")
///     .limit(1);
/// assert_eq!(
///     query.to_query_string(),
///     "content_type=article&fields.slug=first-post&limit=1"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Empty query matching all entries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by content type.
    #[must_use]
    pub fn content_type(self, id: &str) -> Self {
        self.pair("content_type", id)
    }

    /// Field-equality predicate. The field path may traverse links, e.g.
    /// `fields.category.fields.slug`.
    #[must_use]
    pub fn field_eq(self, field: &str, value: &str) -> Self {
        self.pair(field, value)
    }

    /// Maximum number of items to return.
    #[must_use]
    pub fn limit(self, limit: u32) -> Self {
        self.pair("limit", &limit.to_string())
    }

    /// Number of items to skip.
    #[must_use]
    pub fn skip(self, skip: u32) -> Self {
        self.pair("skip", &skip.to_string())
    }

    /// Sort order, e.g. `fields.order` or `-sys.createdAt`.
    #[must_use]
    pub fn order(self, field: &str) -> Self {
        self.pair("order", field)
    }

    /// Entries that link to the given entry.
    #[must_use]
    pub fn links_to_entry(self, entry_id: &str) -> Self {
        self.pair("links_to_entry", entry_id)
    }

    fn pair(mut self, key: &str, value: &str) -> Self {
        self.pairs.push((key.to_owned(), value.to_owned()));
        self
    }

    /// Serialize to a query string. Keys are emitted verbatim; values are
    /// percent-encoded.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| {
                format!("{key}={}", utf8_percent_encode(value, QUERY_ESCAPES))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_nested_link_predicate() {
        let query = Query::new()
            .content_type("article")
            .field_eq("fields.category.sys.contentType.sys.id", "category")
            .field_eq("fields.category.fields.slug", "rust")
            .limit(1);

        assert_eq!(
            query.to_query_string(),
            "content_type=article\
             &fields.category.sys.contentType.sys.id=category\
             &fields.category.fields.slug=rust\
             &limit=1"
        );
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let query = Query::new().field_eq("fields.slug", "a b/c");
        assert_eq!(query.to_query_string(), "fields.slug=a%20b%2Fc");
    }

    #[test]
    fn test_order_and_links_to_entry() {
        let query = Query::new()
            .content_type("category")
            .order("fields.order")
            .links_to_entry("cat1");
        assert_eq!(
            query.to_query_string(),
            "content_type=category&order=fields.order&links_to_entry=cat1"
        );
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(Query::new().to_query_string(), "");
    }
}
