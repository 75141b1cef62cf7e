//! Content source abstraction.
//!
//! Page assembly depends on this trait, never on a concrete client, so
//! site generation is testable against [`MockContentSource`](crate::MockContentSource)
//! without a network.

use crate::error::ContentError;
use crate::fields::{ArticleFields, CategoryFields, PrivacyPolicyFields, SettingFields};
use crate::types::Entry;

/// Read access to the published content of the blog.
///
/// Implemented by [`DeliveryClient`](crate::DeliveryClient) against the
/// delivery API and by [`MockContentSource`](crate::MockContentSource) in
/// memory.
pub trait ContentSource {
    /// All published articles.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the query fails.
    fn all_articles(&self) -> Result<Vec<Entry<ArticleFields>>, ContentError>;

    /// The most recently created articles, newest first, at most `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the query fails.
    fn new_articles(&self, limit: u32) -> Result<Vec<Entry<ArticleFields>>, ContentError>;

    /// Articles whose linked category has the given slug.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the query fails.
    fn articles_by_category(
        &self,
        category_slug: &str,
    ) -> Result<Vec<Entry<ArticleFields>>, ContentError>;

    /// One article addressed by category slug and article slug, or `None`
    /// when no article matches.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the query fails.
    fn article_by_slug(
        &self,
        category_slug: &str,
        slug: &str,
    ) -> Result<Option<Entry<ArticleFields>>, ContentError>;

    /// All categories, sorted by their `order` field.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the query fails.
    fn categories(&self) -> Result<Vec<Entry<CategoryFields>>, ContentError>;

    /// The site-wide settings entry, or `None` when none is published.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the query fails.
    fn setting(&self) -> Result<Option<Entry<SettingFields>>, ContentError>;

    /// The privacy policy entry, or `None` when none is published.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the query fails.
    fn privacy_policy(&self) -> Result<Option<Entry<PrivacyPolicyFields>>, ContentError>;

    /// Number of entries linking to the given entry. Used for per-category
    /// article counts.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the query fails.
    fn links_to_count(&self, entry_id: &str) -> Result<u32, ContentError>;
}
