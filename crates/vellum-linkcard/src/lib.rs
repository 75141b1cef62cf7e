//! Link metadata enrichment for rich-document rendering.
//!
//! Given a serialized rich document, this crate discovers every distinct
//! outbound URL, fetches each one at most once, scrapes Open-Graph-style
//! `<meta>` tags from the returned markup, and produces a
//! [`LinkMetadata`] record per URL for rich link-preview rendering.
//!
//! Fetching goes through the [`Fetch`] trait so tests can inject canned
//! responses; production code uses [`HttpFetcher`]. Per-URL failures are
//! logged and isolated: the enrichment step always completes and returns
//! a (possibly partial) map.

mod discover;
mod enrich;
mod fetch;
mod marketplace;
mod scrape;

pub use discover::discover_urls;
pub use enrich::{FetchOptions, LinkMetadata, enrich};
pub use fetch::{Fetch, FetchError, HttpFetcher};
pub use marketplace::marketplace_image_url;
pub use scrape::{ScrapedMeta, scrape_meta};
