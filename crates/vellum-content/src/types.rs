//! Delivery API entry types.

use serde::Deserialize;

/// System metadata attached to every entry and asset.
#[derive(Debug, Clone, Deserialize)]
pub struct Sys {
    /// Entry or asset id.
    pub id: String,
    /// Creation timestamp (RFC 3339).
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    /// Last-update timestamp (RFC 3339).
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

/// One typed entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry<F> {
    /// System metadata.
    pub sys: Sys,
    /// Content-type-specific fields.
    pub fields: F,
}

/// A page of entries, as returned by the delivery API.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryCollection<F> {
    /// Total number of matching entries (across all pages).
    pub total: u32,
    /// Number of entries skipped.
    #[serde(default)]
    pub skip: u32,
    /// Page size limit.
    #[serde(default)]
    pub limit: u32,
    /// Entries in this page.
    pub items: Vec<Entry<F>>,
}

/// A media asset.
#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    /// System metadata.
    pub sys: Sys,
    /// Asset fields.
    pub fields: AssetFields,
}

/// Asset fields.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetFields {
    /// Asset title.
    #[serde(default)]
    pub title: Option<String>,
    /// Asset description.
    #[serde(default)]
    pub description: Option<String>,
    /// File payload; absent while the asset is processing.
    #[serde(default)]
    pub file: Option<AssetFile>,
}

/// Asset file payload.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetFile {
    /// File URL (protocol-relative).
    pub url: String,
    /// Image detail block, present for image files.
    #[serde(default)]
    pub details: Option<FileDetails>,
}

/// File details.
#[derive(Debug, Clone, Deserialize)]
pub struct FileDetails {
    /// Image dimensions.
    #[serde(default)]
    pub image: Option<ImageDetails>,
}

/// Recorded image dimensions.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ImageDetails {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Asset {
    /// The asset's file URL, when the file payload is present.
    #[must_use]
    pub fn file_url(&self) -> Option<&str> {
        self.fields.file.as_ref().map(|file| file.url.as_str())
    }
}
