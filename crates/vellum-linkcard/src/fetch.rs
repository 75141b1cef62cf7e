//! Fetch abstraction over HTTP GET-to-text.

use std::time::Duration;

use ureq::Agent;

/// Error from fetching a URL.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },
}

/// URL-GET-to-text capability used by the enrichment step.
///
/// Implementations must be [`Sync`]: distinct URLs are fetched in parallel
/// against a shared instance.
pub trait Fetch: Sync {
    /// Fetch the body of `url` as text.
    fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Production fetcher over a shared [`ureq::Agent`].
pub struct HttpFetcher {
    agent: Agent,
}

impl HttpFetcher {
    /// Create a fetcher with a global per-request timeout.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

impl Fetch for HttpFetcher {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.agent.get(url).call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(FetchError::HttpResponse {
                status,
                body: error_body,
            });
        }

        Ok(body_reader.read_to_string()?)
    }
}
