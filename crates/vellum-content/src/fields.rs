//! Field types per content type.

use serde::Deserialize;
use serde_json::Value;

use crate::types::{Asset, Entry};

/// Content type identifiers used in delivery queries.
pub mod content_type {
    /// Blog article.
    pub const ARTICLE: &str = "article";
    /// Article category.
    pub const CATEGORY: &str = "category";
    /// Privacy policy page.
    pub const PRIVACY_POLICY: &str = "privacyPolicy";
    /// Site-wide settings entry.
    pub const SETTING: &str = "setting";
}

/// Article entry fields.
///
/// `category` and `thumbnail` deserialize to `None` when the link did not
/// resolve. An article body is either a rich document (`contents`) or
/// markdown (`md_contents`); the rich document wins when both are set.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleFields {
    /// Article title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Linked category entry.
    #[serde(default)]
    pub category: Option<Entry<CategoryFields>>,
    /// Linked thumbnail asset.
    #[serde(default)]
    pub thumbnail: Option<Asset>,
    /// Rich document body (raw CMS JSON).
    #[serde(default)]
    pub contents: Option<Value>,
    /// Markdown body.
    #[serde(rename = "mdContents", default)]
    pub md_contents: Option<String>,
}

/// Category entry fields.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryFields {
    /// Category display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Sort order.
    #[serde(default)]
    pub order: Option<i64>,
}

/// Site-wide settings fields.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingFields {
    /// Site title.
    pub title: String,
    /// Site description.
    #[serde(default)]
    pub description: Option<String>,
    /// Site logo asset.
    #[serde(default)]
    pub logo: Option<Asset>,
    /// Fallback thumbnail used wherever an article has none.
    #[serde(rename = "defaultThumbnail", default)]
    pub default_thumbnail: Option<Asset>,
}

/// Privacy policy fields.
#[derive(Debug, Clone, Deserialize)]
pub struct PrivacyPolicyFields {
    /// Rich document body (raw CMS JSON).
    #[serde(default)]
    pub contents: Option<Value>,
}
