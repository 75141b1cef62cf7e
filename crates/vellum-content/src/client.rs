//! Delivery API HTTP client.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, info};
use ureq::Agent;

use crate::error::ContentError;
use crate::fields::{
    ArticleFields, CategoryFields, PrivacyPolicyFields, SettingFields, content_type,
};
use crate::query::Query;
use crate::resolve::resolve_links;
use crate::source::ContentSource;
use crate::types::{Entry, EntryCollection};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Link inclusion depth requested from the API; the maximum, so embedded
/// entries arrive with their own categories and thumbnails resolvable.
const INCLUDE_DEPTH: u32 = 10;

/// Client for a Contentful-style content delivery API.
pub struct DeliveryClient {
    agent: Agent,
    base_url: String,
    access_token: String,
}

impl DeliveryClient {
    /// Create a client for one space and environment.
    #[must_use]
    pub fn new(host: &str, space_id: &str, environment: &str, access_token: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: format!(
                "https://{}/spaces/{space_id}/environments/{environment}",
                host.trim_end_matches('/')
            ),
            access_token: access_token.to_owned(),
        }
    }

    /// Fetch one page of entries matching the query, with link stubs
    /// resolved against the response `includes`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::HttpResponse`] for HTTP error statuses and
    /// [`ContentError::Json`] when the payload does not deserialize.
    pub fn entries<F: DeserializeOwned>(
        &self,
        query: &Query,
    ) -> Result<EntryCollection<F>, ContentError> {
        let query_string = query.to_query_string();
        let mut url = format!("{}/entries?include={INCLUDE_DEPTH}", self.base_url);
        if !query_string.is_empty() {
            url.push('&');
            url.push_str(&query_string);
        }

        debug!("Fetching entries: {}", query_string);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &format!("Bearer {}", self.access_token))
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ContentError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let raw: serde_json::Value = body_reader.read_json()?;
        let collection: EntryCollection<F> = serde_json::from_value(resolve_links(&raw))?;
        info!(
            "Fetched {} of {} entries",
            collection.items.len(),
            collection.total
        );
        Ok(collection)
    }

    fn article_query() -> Query {
        Query::new().content_type(content_type::ARTICLE)
    }
}

impl ContentSource for DeliveryClient {
    fn all_articles(&self) -> Result<Vec<Entry<ArticleFields>>, ContentError> {
        Ok(self.entries(&Self::article_query())?.items)
    }

    fn new_articles(&self, limit: u32) -> Result<Vec<Entry<ArticleFields>>, ContentError> {
        let query = Self::article_query().order("-sys.createdAt").limit(limit);
        Ok(self.entries(&query)?.items)
    }

    fn articles_by_category(
        &self,
        category_slug: &str,
    ) -> Result<Vec<Entry<ArticleFields>>, ContentError> {
        let query = Self::article_query()
            .field_eq(
                "fields.category.sys.contentType.sys.id",
                content_type::CATEGORY,
            )
            .field_eq("fields.category.fields.slug", category_slug);
        Ok(self.entries(&query)?.items)
    }

    fn article_by_slug(
        &self,
        category_slug: &str,
        slug: &str,
    ) -> Result<Option<Entry<ArticleFields>>, ContentError> {
        let query = Self::article_query()
            .field_eq(
                "fields.category.sys.contentType.sys.id",
                content_type::CATEGORY,
            )
            .field_eq("fields.category.fields.slug", category_slug)
            .field_eq("fields.slug", slug)
            .limit(1);
        Ok(self.entries(&query)?.items.into_iter().next())
    }

    fn categories(&self) -> Result<Vec<Entry<CategoryFields>>, ContentError> {
        let query = Query::new()
            .content_type(content_type::CATEGORY)
            .order("fields.order");
        Ok(self.entries(&query)?.items)
    }

    fn setting(&self) -> Result<Option<Entry<SettingFields>>, ContentError> {
        let query = Query::new().content_type(content_type::SETTING).limit(1);
        Ok(self.entries(&query)?.items.into_iter().next())
    }

    fn privacy_policy(&self) -> Result<Option<Entry<PrivacyPolicyFields>>, ContentError> {
        let query = Query::new()
            .content_type(content_type::PRIVACY_POLICY)
            .limit(1);
        Ok(self.entries(&query)?.items.into_iter().next())
    }

    fn links_to_count(&self, entry_id: &str) -> Result<u32, ContentError> {
        // limit=0 returns the total without item payloads.
        let query = Self::article_query().links_to_entry(entry_id).limit(0);
        Ok(self.entries::<ArticleFields>(&query)?.total)
    }
}
