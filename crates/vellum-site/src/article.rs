//! Article page assembly.

use std::collections::BTreeMap;

use vellum_content::{ArticleFields, Entry};
use vellum_linkcard::{Fetch, FetchOptions, enrich};
use vellum_richtext::{
    CategoryRef, Node, RenderContext, TocEntry, format_jst, render, render_markdown,
    table_of_contents,
};

use crate::breadcrumbs::{Breadcrumb, article_breadcrumbs};
use crate::error::SiteError;

/// A fully assembled article page.
#[derive(Debug, Clone)]
pub struct ArticlePage {
    /// Article title.
    pub title: String,
    /// Rendered body HTML.
    pub body_html: String,
    /// Table of contents for the body's headings.
    pub toc: Vec<TocEntry>,
    /// JST-formatted creation date; empty when unknown.
    pub date: String,
    /// Home → category → article trail.
    pub breadcrumbs: Vec<Breadcrumb>,
}

/// Assemble one article page: enrich outbound links, render the body,
/// and derive the table of contents, date, and breadcrumb trail.
///
/// A rich document body wins over the markdown fallback when both are
/// set; an article with neither renders an empty body.
///
/// # Errors
///
/// Returns [`SiteError::Json`] if the rich document cannot be
/// re-serialized for link discovery.
pub fn assemble_article(
    article: &Entry<ArticleFields>,
    site_title: &str,
    categories: &BTreeMap<String, CategoryRef>,
    default_thumbnail_url: &str,
    fetcher: &dyn Fetch,
    options: FetchOptions,
) -> Result<ArticlePage, SiteError> {
    let (body_html, toc) = match (&article.fields.contents, &article.fields.md_contents) {
        (Some(contents), _) => {
            let serialized = serde_json::to_string(contents)?;
            let links = enrich(&serialized, fetcher, default_thumbnail_url, options);
            let document = Node::document_from_json(contents);
            let context = RenderContext::new(default_thumbnail_url)
                .with_categories(categories.clone())
                .with_links(links);
            (render(&document, &context), table_of_contents(&document))
        }
        (None, Some(markdown)) => (render_markdown(markdown), Vec::new()),
        (None, None) => (String::new(), Vec::new()),
    };

    let (category_slug, category_title) = article
        .fields
        .category
        .as_ref()
        .map(|category| {
            (
                category.fields.slug.as_str(),
                category.fields.name.as_str(),
            )
        })
        .unwrap_or_default();

    Ok(ArticlePage {
        title: article.fields.title.clone(),
        body_html,
        toc,
        date: article
            .sys
            .created_at
            .as_deref()
            .and_then(format_jst)
            .unwrap_or_default(),
        breadcrumbs: article_breadcrumbs(
            site_title,
            category_slug,
            category_title,
            &article.fields.slug,
            &article.fields.title,
        ),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use vellum_content::{CategoryFields, Sys};
    use vellum_linkcard::FetchError;

    use super::*;

    struct NoFetch;

    impl Fetch for NoFetch {
        fn get_text(&self, _url: &str) -> Result<String, FetchError> {
            Err(FetchError::HttpResponse {
                status: 503,
                body: String::new(),
            })
        }
    }

    fn article(contents: Option<serde_json::Value>, markdown: Option<&str>) -> Entry<ArticleFields> {
        Entry {
            sys: Sys {
                id: "a1".to_owned(),
                created_at: Some("2023-04-01T00:30:00Z".to_owned()),
                updated_at: None,
            },
            fields: ArticleFields {
                title: "First Post".to_owned(),
                slug: "first-post".to_owned(),
                category: Some(Entry {
                    sys: Sys {
                        id: "c1".to_owned(),
                        created_at: None,
                        updated_at: None,
                    },
                    fields: CategoryFields {
                        name: "Rust".to_owned(),
                        slug: "rust".to_owned(),
                        order: None,
                    },
                }),
                thumbnail: None,
                contents,
                md_contents: markdown.map(str::to_owned),
            },
        }
    }

    fn rich_document() -> serde_json::Value {
        json!({
            "nodeType": "document",
            "content": [
                {
                    "nodeType": "heading-2",
                    "content": [{"nodeType": "text", "value": "Setup", "marks": []}],
                },
                {
                    "nodeType": "paragraph",
                    "content": [{"nodeType": "text", "value": "Install the toolchain.", "marks": []}],
                },
            ],
        })
    }

    #[test]
    fn test_rich_document_body_with_toc_and_trail() {
        let page = assemble_article(
            &article(Some(rich_document()), None),
            "My Blog",
            &BTreeMap::new(),
            "",
            &NoFetch,
            FetchOptions::default(),
        )
        .unwrap();

        assert!(page.body_html.contains("<h2 id="));
        assert!(page.body_html.contains("Install the toolchain."));
        assert_eq!(page.toc.len(), 1);
        assert_eq!(page.toc[0].title, "Setup");
        assert_eq!(page.date, "2023年04月01日 09:30");
        let labels: Vec<_> = page
            .breadcrumbs
            .iter()
            .map(|crumb| crumb.label.as_str())
            .collect();
        assert_eq!(labels, vec!["My Blog", "Rust", "First Post"]);
    }

    #[test]
    fn test_markdown_fallback() {
        let page = assemble_article(
            &article(None, Some("## Setup\n\nInstall the toolchain.")),
            "My Blog",
            &BTreeMap::new(),
            "",
            &NoFetch,
            FetchOptions::default(),
        )
        .unwrap();

        assert!(page.body_html.contains("<h2>Setup</h2>"));
        assert!(page.toc.is_empty());
    }

    #[test]
    fn test_rich_document_wins_over_markdown() {
        let page = assemble_article(
            &article(Some(rich_document()), Some("## Markdown heading")),
            "My Blog",
            &BTreeMap::new(),
            "",
            &NoFetch,
            FetchOptions::default(),
        )
        .unwrap();

        assert!(page.body_html.contains("<h2 id="));
        assert!(!page.body_html.contains("Markdown heading"));
    }

    #[test]
    fn test_empty_body_when_no_contents() {
        let page = assemble_article(
            &article(None, None),
            "My Blog",
            &BTreeMap::new(),
            "",
            &NoFetch,
            FetchOptions::default(),
        )
        .unwrap();

        assert_eq!(page.body_html, "");
    }
}
