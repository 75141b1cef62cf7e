//! Article cards and grouped listings.

use vellum_content::{ArticleFields, Entry};
use vellum_richtext::{Node, format_jst};

use crate::category::CategoryLink;

/// Pseudo-category heading the home page's latest-articles group.
const NEW_ARTICLES_TITLE: &str = "新着記事";
const NEW_ARTICLES_PATH: &str = "/new";

/// One article in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    /// Article page path, `/{category}/{slug}`.
    pub href: String,
    /// Thumbnail URL, falling back to the default.
    pub image_src: String,
    /// Article title.
    pub title: String,
    /// JST-formatted creation date; empty when unknown.
    pub date: String,
    /// Plain-text body excerpt; empty for markdown articles.
    pub excerpt: String,
}

/// One home-page group: a category and its article cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    /// Group heading data.
    pub category: CategoryLink,
    /// Cards in the group.
    pub items: Vec<ArticleCard>,
}

/// Card data for one article, or `None` when the article has no resolved
/// category (such an article has no address on the site).
#[must_use]
pub fn article_card(
    article: &Entry<ArticleFields>,
    default_thumbnail_url: &str,
) -> Option<ArticleCard> {
    let category = article.fields.category.as_ref()?;
    let image_src = article
        .fields
        .thumbnail
        .as_ref()
        .and_then(|thumbnail| thumbnail.file_url())
        .map_or_else(|| default_thumbnail_url.to_owned(), str::to_owned);

    Some(ArticleCard {
        href: format!("/{}/{}", category.fields.slug, article.fields.slug),
        image_src,
        title: article.fields.title.clone(),
        date: article
            .sys
            .created_at
            .as_deref()
            .and_then(format_jst)
            .unwrap_or_default(),
        excerpt: article
            .fields
            .contents
            .as_ref()
            .map(|contents| excerpt(&Node::document_from_json(contents)))
            .unwrap_or_default(),
    })
}

/// Concatenated text of every text run in the document.
#[must_use]
pub fn excerpt(document: &Node) -> String {
    let mut out = String::new();
    collect_text(document, &mut out);
    out
}

fn collect_text(node: &Node, out: &mut String) {
    if let Node::Text { value, .. } = node {
        out.push_str(value);
    }
    for child in node.content() {
        collect_text(child, out);
    }
}

/// Home page groups: the latest-articles pseudo-category first, then one
/// group per category. Articles without a category appear in no group.
#[must_use]
pub fn home_groups(
    articles: &[Entry<ArticleFields>],
    categories: &[CategoryLink],
    default_thumbnail_url: &str,
) -> Vec<CategoryGroup> {
    let mut groups = vec![CategoryGroup {
        category: CategoryLink {
            id: String::new(),
            title: NEW_ARTICLES_TITLE.to_owned(),
            path: NEW_ARTICLES_PATH.to_owned(),
            count: 0,
        },
        items: articles
            .iter()
            .filter_map(|article| article_card(article, default_thumbnail_url))
            .collect(),
    }];

    for link in categories {
        groups.push(CategoryGroup {
            category: link.clone(),
            items: articles
                .iter()
                .filter(|article| {
                    article
                        .fields
                        .category
                        .as_ref()
                        .is_some_and(|category| format!("/{}", category.fields.slug) == link.path)
                })
                .filter_map(|article| article_card(article, default_thumbnail_url))
                .collect(),
        });
    }
    groups
}
