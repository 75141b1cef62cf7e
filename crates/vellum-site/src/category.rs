//! Category navigation data.

use std::collections::BTreeMap;

use vellum_content::{CategoryFields, ContentError, ContentSource, Entry};
use vellum_richtext::CategoryRef;

/// One category in navigation and sidebar lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLink {
    /// Category entry id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Category page path, e.g. `/rust`.
    pub path: String,
    /// Number of articles linking to the category.
    pub count: u32,
}

/// Categories joined with their article counts, in CMS sort order.
///
/// # Errors
///
/// Returns [`ContentError`] if a query fails.
pub fn category_links(source: &dyn ContentSource) -> Result<Vec<CategoryLink>, ContentError> {
    source
        .categories()?
        .iter()
        .map(|category| {
            Ok(CategoryLink {
                id: category.sys.id.clone(),
                title: category.fields.name.clone(),
                path: format!("/{}", category.fields.slug),
                count: source.links_to_count(&category.sys.id)?,
            })
        })
        .collect()
}

/// Category-id lookup map for embedded entry cross-links in rich documents.
#[must_use]
pub fn category_refs(categories: &[Entry<CategoryFields>]) -> BTreeMap<String, CategoryRef> {
    categories
        .iter()
        .map(|category| {
            (
                category.sys.id.clone(),
                CategoryRef {
                    path: format!("/{}", category.fields.slug),
                    title: category.fields.name.clone(),
                },
            )
        })
        .collect()
}
