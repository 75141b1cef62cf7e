//! Page assembly and static site generation.
//!
//! This crate turns CMS content into a static page tree:
//! - [`SiteBuilder`]: generation driver writing the full page set
//! - [`assemble_article`]: one article page (enrichment, rendering,
//!   table of contents, breadcrumbs)
//! - [`category_links`] / [`home_groups`]: navigation and listing data
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use std::time::Duration;
//! use vellum_content::DeliveryClient;
//! use vellum_linkcard::HttpFetcher;
//! use vellum_site::{BuildOptions, SiteBuilder};
//!
//! let client = DeliveryClient::new("cdn.contentful.com", "space", "master", "token");
//! let fetcher = HttpFetcher::new(Duration::from_secs(10));
//! let builder = SiteBuilder::new(&client, &fetcher, BuildOptions::default());
//! let summary = builder.build(Path::new("public"))?;
//! # Ok(())
//! # }
//! ```

mod article;
mod breadcrumbs;
mod builder;
mod category;
mod error;
mod html;
mod listing;

pub use article::{ArticlePage, assemble_article};
pub use breadcrumbs::{
    Breadcrumb, article_breadcrumbs, category_breadcrumbs, privacy_policy_breadcrumbs,
};
pub use builder::{BuildOptions, BuildSummary, SiteBuilder};
pub use category::{CategoryLink, category_links, category_refs};
pub use error::SiteError;
pub use vellum_richtext::format_jst;
pub use html::{article_page, document_page, home_page, listing_page};
pub use listing::{ArticleCard, CategoryGroup, article_card, excerpt, home_groups};
