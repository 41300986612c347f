use crate::prelude::{eprintln, *};
use haystack_core::pinboard::normalize::to_vocabulary;
use haystack_core::pinboard::render::render_tag_counts;
use haystack_core::pinboard::tags::tags_like;
use haystack_core::pinboard::TagCount;
use log::debug;

use super::{format_json, write_output, PinboardClient};

pub async fn run(client: &PinboardClient, queries: &[String], global: &crate::Global) -> Result<()> {
    if global.verbose {
        if queries.is_empty() {
            eprintln!("Fetching all tags...");
        } else {
            eprintln!("Fetching tags like {}...", queries.join(", "));
        }
    }

    let tags = search_tags_data(client, queries).await?;

    let text = if global.json {
        format!("{}\n", format_json(&tags)?)
    } else {
        render_tag_counts(&tags)
    };

    write_output(&mut std::io::stdout().lock(), &text)
}

/// Fetches the tag vocabulary and ranks the tags similar to `queries`
pub async fn search_tags_data(
    client: &PinboardClient,
    queries: &[String],
) -> Result<Vec<TagCount>, Error> {
    let raw = client.get_tags().await?;
    let vocabulary = to_vocabulary(raw)?;
    debug!("Vocabulary has {} tags", vocabulary.len());

    Ok(tags_like(&vocabulary, queries))
}
