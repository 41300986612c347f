use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

/// A saved bookmark, normalized from a [`super::wire::RawPost`]
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Post {
    pub title: String,
    pub description: String,
    pub hash: String,
    pub tags: Vec<String>,
    pub saved_at: DateTime<Utc>,
    /// The link exactly as it was saved
    pub href: String,
    /// `None` when the service sent an `href` that is not an absolute URL
    pub url: Option<Url>,
    pub shared: bool,
    pub to_read: bool,
}

/// A tag and the number of posts using it
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

impl TagCount {
    pub fn new(tag: impl Into<String>, count: u64) -> Self {
        Self {
            tag: tag.into(),
            count,
        }
    }
}

impl fmt::Display for TagCount {
    /// `"go": 42`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.tag, self.count)
    }
}
