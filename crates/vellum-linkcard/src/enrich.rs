//! Enrichment step: fan-out fetch over discovered URLs, merged into a
//! by-URL metadata map.

use std::collections::BTreeMap;

use tracing::warn;

use crate::discover::discover_urls;
use crate::fetch::{Fetch, FetchError};
use crate::marketplace::marketplace_image_url;
use crate::scrape::scrape_meta;

/// Fetch policy for the enrichment fan-out.
///
/// Concurrency is explicit and surfaced through configuration rather than
/// buried as a constant; the per-request timeout lives on the fetcher.
/// There are no retries.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    /// Number of URLs fetched in parallel.
    pub concurrency: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { concurrency: 8 }
    }
}

/// Scraped metadata for one outbound URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMetadata {
    /// The source URL the metadata was scraped from.
    pub url: String,
    /// Page title (possibly empty).
    pub title: String,
    /// Page description (possibly empty).
    pub description: String,
    /// Preview image URL; never empty after post-processing.
    pub image: String,
}

/// Discover every distinct outbound URL in `document_json`, fetch each one
/// once, and return scraped metadata keyed by URL.
///
/// Fetch or parse failure for one URL is logged and yields no entry for
/// that URL; the batch always completes. Records whose image field is
/// empty are patched with `default_image_url`; records with an empty URL
/// key are discarded.
#[must_use]
pub fn enrich(
    document_json: &str,
    fetcher: &dyn Fetch,
    default_image_url: &str,
    options: FetchOptions,
) -> BTreeMap<String, LinkMetadata> {
    let urls = discover_urls(document_json);
    if urls.is_empty() {
        return BTreeMap::new();
    }

    let records = fetch_all(&urls, fetcher, options);

    records
        .into_iter()
        .filter(|record| !record.url.is_empty())
        .map(|mut record| {
            if record.image.is_empty() {
                record.image = default_image_url.to_owned();
            }
            (record.url.clone(), record)
        })
        .collect()
}

/// Fetch all URLs in parallel on a bounded pool, dropping failures.
fn fetch_all(urls: &[String], fetcher: &dyn Fetch, options: FetchOptions) -> Vec<LinkMetadata> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.concurrency.max(1))
        .build();

    match pool {
        Ok(pool) => pool.install(|| {
            urls.par_iter()
                .filter_map(|url| fetch_one(url, fetcher))
                .collect()
        }),
        Err(err) => {
            warn!("link enrichment pool unavailable, fetching sequentially: {err}");
            urls.iter().filter_map(|url| fetch_one(url, fetcher)).collect()
        }
    }
}

/// Fetch and scrape a single URL. Failure yields `None`, never an error.
fn fetch_one(url: &str, fetcher: &dyn Fetch) -> Option<LinkMetadata> {
    let body = match fetcher.get_text(url) {
        Ok(body) => body,
        Err(FetchError::HttpResponse { status, .. }) => {
            warn!("link enrichment skipped {url}: HTTP {status}");
            return None;
        }
        Err(err) => {
            warn!("link enrichment skipped {url}: {err}");
            return None;
        }
    };

    let meta = scrape_meta(&body);
    let image = if meta.image.is_empty() {
        marketplace_image_url(url).unwrap_or_default()
    } else {
        meta.image
    };

    Some(LinkMetadata {
        url: url.to_owned(),
        title: meta.title,
        description: meta.description,
        image,
    })
}
