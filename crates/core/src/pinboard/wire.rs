//! Pinboard API response types (deserialization)
//!
//! These mirror the JSON the service sends, string-encoded flags and all.
//! Nothing outside [`super::normalize`] should read them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single record from `GET /v1/posts/all`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RawPost {
    /// Title of the saved page
    #[serde(default)]
    pub description: String,
    /// Free text notes
    #[serde(default)]
    pub extended: String,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub meta: String,
    /// `"yes"` or `"no"`
    #[serde(default)]
    pub shared: String,
    /// Space separated tag list
    #[serde(default)]
    pub tags: String,
    pub time: DateTime<Utc>,
    /// `"yes"` or `"no"`
    #[serde(default)]
    pub toread: String,
}

/// Body of `GET /v1/posts/all`
pub type RawAllPostsResponse = Vec<RawPost>;

/// A tag usage count as sent by the service.
///
/// Some API versions send `{"rust": 10}`, others `{"rust": "10"}`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum WireCount {
    Number(u64),
    Text(String),
}

/// Body of `GET /v1/tags/get`
pub type RawTagsResponse = BTreeMap<String, WireCount>;
