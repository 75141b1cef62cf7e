//! Static site generation driver.

use std::fs;
use std::path::Path;

use tracing::{info, warn};
use vellum_content::ContentSource;
use vellum_linkcard::{Fetch, FetchOptions};
use vellum_richtext::{Node, RenderContext, render};

use crate::article::assemble_article;
use crate::breadcrumbs::{category_breadcrumbs, privacy_policy_breadcrumbs};
use crate::category::{category_links, category_refs};
use crate::error::SiteError;
use crate::html;
use crate::listing::{article_card, home_groups};

/// Site-wide build options.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Site title, used as the home breadcrumb and page title.
    pub site_title: String,
    /// Number of articles on the latest-articles page.
    pub new_articles_limit: u32,
    /// Link enrichment fan-out options.
    pub fetch: FetchOptions,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            site_title: "Blog".to_owned(),
            new_articles_limit: 10,
            fetch: FetchOptions::default(),
        }
    }
}

/// What a build produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    /// Number of HTML pages written.
    pub pages: usize,
}

/// Generates the whole site into an output directory.
///
/// Pages build sequentially; the only internal concurrency is the link
/// enrichment fan-out inside each article. A page whose content entry is
/// missing is skipped with a warning.
pub struct SiteBuilder<'a> {
    source: &'a dyn ContentSource,
    fetcher: &'a dyn Fetch,
    options: BuildOptions,
}

impl<'a> SiteBuilder<'a> {
    /// Create a builder over a content source and an HTTP fetcher.
    #[must_use]
    pub fn new(source: &'a dyn ContentSource, fetcher: &'a dyn Fetch, options: BuildOptions) -> Self {
        Self {
            source,
            fetcher,
            options,
        }
    }

    /// Generate every page under `out_dir`.
    ///
    /// Writes `index.html`, `new/index.html`, `privacy-policy/index.html`,
    /// `{category}/index.html`, and `{category}/{slug}/index.html`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] on content query failure or when a page
    /// cannot be written.
    pub fn build(&self, out_dir: &Path) -> Result<BuildSummary, SiteError> {
        let site_title = self.options.site_title.as_str();

        let (logo_url, default_thumbnail_url) = match self.source.setting()? {
            Some(setting) => (
                setting
                    .fields
                    .logo
                    .as_ref()
                    .and_then(|logo| logo.file_url())
                    .unwrap_or_default()
                    .to_owned(),
                setting
                    .fields
                    .default_thumbnail
                    .as_ref()
                    .and_then(|thumbnail| thumbnail.file_url())
                    .unwrap_or_default()
                    .to_owned(),
            ),
            None => {
                warn!("No settings entry published, using empty logo and thumbnail URLs");
                (String::new(), String::new())
            }
        };

        let categories = self.source.categories()?;
        let links = category_links(self.source)?;
        let refs = category_refs(&categories);
        let mut pages = 0;

        // Home page.
        let all_articles = self.source.all_articles()?;
        let groups = home_groups(&all_articles, &links, &default_thumbnail_url);
        write_page(
            &out_dir.join("index.html"),
            &html::home_page(site_title, &groups, &links, &logo_url),
        )?;
        pages += 1;

        // Latest articles.
        let new_articles = self.source.new_articles(self.options.new_articles_limit)?;
        let new_cards: Vec<_> = new_articles
            .iter()
            .filter_map(|article| article_card(article, &default_thumbnail_url))
            .collect();
        write_page(
            &out_dir.join("new").join("index.html"),
            &html::listing_page("新着記事", &[], &new_cards, &links, &logo_url),
        )?;
        pages += 1;

        // Privacy policy.
        match self.source.privacy_policy()? {
            Some(policy) => {
                if let Some(contents) = &policy.fields.contents {
                    let document = Node::document_from_json(contents);
                    let context = RenderContext::new(&default_thumbnail_url)
                        .with_categories(refs.clone());
                    write_page(
                        &out_dir.join("privacy-policy").join("index.html"),
                        &html::document_page(
                            "プライバシーポリシー",
                            &privacy_policy_breadcrumbs(site_title),
                            &render(&document, &context),
                            &links,
                            &logo_url,
                        ),
                    )?;
                    pages += 1;
                } else {
                    warn!("Privacy policy entry has no contents, skipping page");
                }
            }
            None => warn!("Privacy policy entry missing, skipping page"),
        }

        // Category listings and article pages.
        for category in &categories {
            let slug = category.fields.slug.as_str();
            let articles = self.source.articles_by_category(slug)?;
            let cards: Vec<_> = articles
                .iter()
                .filter_map(|article| article_card(article, &default_thumbnail_url))
                .collect();
            let trail = category_breadcrumbs(site_title, slug, &category.fields.name);
            write_page(
                &out_dir.join(slug).join("index.html"),
                &html::listing_page(&category.fields.name, &trail, &cards, &links, &logo_url),
            )?;
            pages += 1;

            for article in &articles {
                let page = assemble_article(
                    article,
                    site_title,
                    &refs,
                    &default_thumbnail_url,
                    self.fetcher,
                    self.options.fetch,
                )?;
                write_page(
                    &out_dir.join(slug).join(&article.fields.slug).join("index.html"),
                    &html::article_page(&page, &links, &logo_url),
                )?;
                pages += 1;
            }
        }

        info!("Generated {} pages", pages);
        Ok(BuildSummary { pages })
    }
}

fn write_page(path: &Path, page: &str) -> Result<(), SiteError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, page)?;
    Ok(())
}
