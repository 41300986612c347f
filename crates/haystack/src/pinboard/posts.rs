use crate::prelude::{eprintln, *};
use haystack_core::pinboard::normalize::to_posts;
use haystack_core::pinboard::posts::sort_by_saved_at;
use haystack_core::pinboard::render::render_posts;
use haystack_core::pinboard::Post;
use log::{debug, warn};

use super::{format_json, output_style, write_output, PinboardClient};

pub async fn run(client: &PinboardClient, tags: &[String], global: &crate::Global) -> Result<()> {
    if global.verbose {
        if tags.is_empty() {
            eprintln!("Fetching all posts...");
        } else {
            eprintln!("Fetching posts tagged {}...", tags.join(" + "));
        }
    }

    let posts = search_posts_data(client, tags).await?;

    for post in posts.iter().filter(|post| post.url.is_none()) {
        warn!("Post {:?} has an invalid URL", post.title);
        if global.verbose {
            eprintln!("Warning: post {:?} has an invalid URL", post.title);
        }
    }

    let stdout = std::io::stdout();
    let text = if global.json {
        format!("{}\n", format_json(&posts)?)
    } else {
        render_posts(&posts, output_style(&stdout), &chrono::Local)
    };

    write_output(&mut stdout.lock(), &text)
}

/// Fetches posts carrying every tag in `tags`, oldest first
pub async fn search_posts_data(client: &PinboardClient, tags: &[String]) -> Result<Vec<Post>, Error> {
    let raw = client.get_posts(tags).await?;
    debug!("Received {} posts", raw.len());

    let mut posts = to_posts(raw);
    sort_by_saved_at(&mut posts);
    Ok(posts)
}
