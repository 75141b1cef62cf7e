//! Mock content source for testing.
//!
//! Provides [`MockContentSource`] for unit testing page assembly without
//! a network.

use std::collections::HashMap;

use crate::error::ContentError;
use crate::fields::{ArticleFields, CategoryFields, PrivacyPolicyFields, SettingFields};
use crate::source::ContentSource;
use crate::types::Entry;

/// In-memory content source.
///
/// Stores entries in memory. Use the builder methods to configure the
/// mock with test data.
///
/// # Example
///
/// ```ignore
/// use vellum_content::{ContentSource, MockContentSource};
///
/// let source = MockContentSource::new()
///     .with_category(rust_category)
///     .with_article(first_post);
///
/// let articles = source.articles_by_category("rust").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockContentSource {
    articles: Vec<Entry<ArticleFields>>,
    categories: Vec<Entry<CategoryFields>>,
    setting: Option<Entry<SettingFields>>,
    privacy_policy: Option<Entry<PrivacyPolicyFields>>,
    links_counts: HashMap<String, u32>,
}

impl MockContentSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an article entry.
    #[must_use]
    pub fn with_article(mut self, article: Entry<ArticleFields>) -> Self {
        self.articles.push(article);
        self
    }

    /// Add a category entry.
    #[must_use]
    pub fn with_category(mut self, category: Entry<CategoryFields>) -> Self {
        self.categories.push(category);
        self
    }

    /// Set the settings entry.
    #[must_use]
    pub fn with_setting(mut self, setting: Entry<SettingFields>) -> Self {
        self.setting = Some(setting);
        self
    }

    /// Set the privacy policy entry.
    #[must_use]
    pub fn with_privacy_policy(mut self, policy: Entry<PrivacyPolicyFields>) -> Self {
        self.privacy_policy = Some(policy);
        self
    }

    /// Set the linking-entry count reported for an entry id.
    #[must_use]
    pub fn with_links_count(mut self, entry_id: &str, count: u32) -> Self {
        self.links_counts.insert(entry_id.to_owned(), count);
        self
    }

    fn category_slug(article: &Entry<ArticleFields>) -> Option<&str> {
        article
            .fields
            .category
            .as_ref()
            .map(|category| category.fields.slug.as_str())
    }
}

impl ContentSource for MockContentSource {
    fn all_articles(&self) -> Result<Vec<Entry<ArticleFields>>, ContentError> {
        Ok(self.articles.clone())
    }

    fn new_articles(&self, limit: u32) -> Result<Vec<Entry<ArticleFields>>, ContentError> {
        let mut articles = self.articles.clone();
        articles.sort_by(|a, b| b.sys.created_at.cmp(&a.sys.created_at));
        articles.truncate(limit as usize);
        Ok(articles)
    }

    fn articles_by_category(
        &self,
        category_slug: &str,
    ) -> Result<Vec<Entry<ArticleFields>>, ContentError> {
        Ok(self
            .articles
            .iter()
            .filter(|article| Self::category_slug(article) == Some(category_slug))
            .cloned()
            .collect())
    }

    fn article_by_slug(
        &self,
        category_slug: &str,
        slug: &str,
    ) -> Result<Option<Entry<ArticleFields>>, ContentError> {
        Ok(self
            .articles
            .iter()
            .find(|article| {
                article.fields.slug == slug && Self::category_slug(article) == Some(category_slug)
            })
            .cloned())
    }

    fn categories(&self) -> Result<Vec<Entry<CategoryFields>>, ContentError> {
        let mut categories = self.categories.clone();
        categories.sort_by_key(|category| category.fields.order.unwrap_or(i64::MAX));
        Ok(categories)
    }

    fn setting(&self) -> Result<Option<Entry<SettingFields>>, ContentError> {
        Ok(self.setting.clone())
    }

    fn privacy_policy(&self) -> Result<Option<Entry<PrivacyPolicyFields>>, ContentError> {
        Ok(self.privacy_policy.clone())
    }

    fn links_to_count(&self, entry_id: &str) -> Result<u32, ContentError> {
        Ok(self.links_counts.get(entry_id).copied().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::Sys;

    fn sys(id: &str, created_at: &str) -> Sys {
        Sys {
            id: id.to_owned(),
            created_at: Some(created_at.to_owned()),
            updated_at: None,
        }
    }

    fn category(id: &str, slug: &str, order: Option<i64>) -> Entry<CategoryFields> {
        Entry {
            sys: sys(id, "2023-01-01T00:00:00Z"),
            fields: CategoryFields {
                name: slug.to_owned(),
                slug: slug.to_owned(),
                order,
            },
        }
    }

    fn article(id: &str, slug: &str, category_slug: &str, created_at: &str) -> Entry<ArticleFields> {
        Entry {
            sys: sys(id, created_at),
            fields: ArticleFields {
                title: slug.to_owned(),
                slug: slug.to_owned(),
                category: Some(category("cat-id", category_slug, None)),
                thumbnail: None,
                contents: None,
                md_contents: None,
            },
        }
    }

    #[test]
    fn test_new_articles_newest_first_with_limit() {
        let source = MockContentSource::new()
            .with_article(article("a1", "oldest", "rust", "2023-01-01T00:00:00Z"))
            .with_article(article("a2", "newest", "rust", "2023-03-01T00:00:00Z"))
            .with_article(article("a3", "middle", "rust", "2023-02-01T00:00:00Z"));

        let articles = source.new_articles(2).unwrap();
        let slugs: Vec<_> = articles
            .iter()
            .map(|article| article.fields.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["newest", "middle"]);
    }

    #[test]
    fn test_articles_by_category_filters_on_slug() {
        let source = MockContentSource::new()
            .with_article(article("a1", "one", "rust", "2023-01-01T00:00:00Z"))
            .with_article(article("a2", "two", "life", "2023-01-02T00:00:00Z"));

        let articles = source.articles_by_category("rust").unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].fields.slug, "one");
    }

    #[test]
    fn test_article_by_slug_requires_both_slugs() {
        let source = MockContentSource::new().with_article(article(
            "a1",
            "post",
            "rust",
            "2023-01-01T00:00:00Z",
        ));

        assert!(source.article_by_slug("rust", "post").unwrap().is_some());
        assert!(source.article_by_slug("life", "post").unwrap().is_none());
        assert!(source.article_by_slug("rust", "other").unwrap().is_none());
    }

    #[test]
    fn test_categories_sorted_by_order() {
        let source = MockContentSource::new()
            .with_category(category("c1", "unordered", None))
            .with_category(category("c2", "second", Some(2)))
            .with_category(category("c3", "first", Some(1)));

        let categories = source.categories().unwrap();
        let slugs: Vec<_> = categories
            .iter()
            .map(|category| category.fields.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["first", "second", "unordered"]);
    }

    #[test]
    fn test_links_to_count_defaults_to_zero() {
        let source = MockContentSource::new().with_links_count("c1", 3);

        assert_eq!(source.links_to_count("c1").unwrap(), 3);
        assert_eq!(source.links_to_count("c2").unwrap(), 0);
    }
}
