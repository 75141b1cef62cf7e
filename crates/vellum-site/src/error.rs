//! Site generation errors.

use thiserror::Error;

use vellum_content::ContentError;

/// Errors surfaced while generating the site.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Content fetch or decode failure.
    #[error("content error: {0}")]
    Content(#[from] ContentError),

    /// Page write failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
