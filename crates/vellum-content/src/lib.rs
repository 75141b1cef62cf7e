//! Headless CMS delivery client.
//!
//! Talks to a Contentful-style content delivery API: typed entry
//! collections filtered by content type and field-equality predicates,
//! with limit/skip/order options and link resolution against the
//! response's `includes` payload.
//!
//! Consumers depend on the [`ContentSource`] trait, never on an ambient
//! client: the production [`DeliveryClient`] and the in-memory
//! [`MockContentSource`] both implement it, so page assembly is testable
//! without a network.

mod client;
mod error;
mod fields;
mod mock;
mod query;
mod resolve;
mod source;
mod types;

pub use client::DeliveryClient;
pub use error::ContentError;
pub use fields::{
    ArticleFields, CategoryFields, PrivacyPolicyFields, SettingFields, content_type,
};
pub use mock::MockContentSource;
pub use query::Query;
pub use resolve::resolve_links;
pub use source::ContentSource;
pub use types::{Asset, AssetFields, AssetFile, Entry, EntryCollection, FileDetails, ImageDetails, Sys};
