//! Wire → domain adapter
//!
//! The only place that knows `"yes"` means true, that tags arrive as one
//! space separated string, and that counts may be string encoded.

use std::collections::BTreeMap;

use url::Url;

use super::model::Post;
use super::wire::{RawPost, RawTagsResponse, WireCount};
use crate::error::CoreError;

/// Convert raw post records into posts, preserving server order.
pub fn to_posts(raw: Vec<RawPost>) -> Vec<Post> {
    raw.into_iter().map(to_post).collect()
}

/// Convert a single raw record. Never fails: a bad `href` becomes `None`.
pub fn to_post(raw: RawPost) -> Post {
    Post {
        url: parse_href(&raw.href),
        href: raw.href,
        tags: parse_tags(&raw.tags),
        shared: is_yes(&raw.shared),
        to_read: is_yes(&raw.toread),
        saved_at: raw.time,
        title: raw.description,
        description: raw.extended,
        hash: raw.hash,
    }
}

/// Split a tag field on runs of whitespace.
pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split_whitespace().map(str::to_string).collect()
}

/// Wire booleans are the exact string `"yes"`; anything else is false.
pub fn is_yes(flag: &str) -> bool {
    flag == "yes"
}

/// Best effort absolute URL parse.
pub fn parse_href(href: &str) -> Option<Url> {
    Url::parse(href).ok()
}

/// Convert the `/v1/tags/get` body into a tag → count vocabulary.
pub fn to_vocabulary(raw: RawTagsResponse) -> Result<BTreeMap<String, u64>, CoreError> {
    raw.into_iter()
        .map(|(tag, count)| {
            let count = match count {
                WireCount::Number(n) => n,
                WireCount::Text(text) => {
                    text.trim()
                        .parse::<u64>()
                        .map_err(|_| CoreError::InvalidCount {
                            tag: tag.clone(),
                            value: text.clone(),
                        })?
                }
            };
            Ok((tag, count))
        })
        .collect()
}
