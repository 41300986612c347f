//! Text rendering for posts and tag counts
//!
//! Renderers return a `String` and take the styling decision as an argument;
//! probing the terminal is the caller's job and happens once per render.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use colored::Colorize;

use super::model::{Post, TagCount};

/// `Jan. 2, 2024 3:04pm`
pub const DATE_FORMAT: &str = "%b. %-d, %Y %-I:%M%P";

/// Whether ANSI styling is applied to rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    #[default]
    Plain,
    Styled,
}

impl OutputStyle {
    /// Styled only when the output is an interactive terminal.
    pub fn from_interactive(interactive: bool) -> Self {
        if interactive {
            OutputStyle::Styled
        } else {
            OutputStyle::Plain
        }
    }

    fn title(self, text: &str) -> String {
        match self {
            OutputStyle::Plain => text.to_string(),
            OutputStyle::Styled => text.red().bold().to_string(),
        }
    }

    fn link(self, text: &str) -> String {
        match self {
            OutputStyle::Plain => text.to_string(),
            OutputStyle::Styled => text.white().underline().to_string(),
        }
    }
}

/// Format a save time in the given timezone.
pub fn format_saved_at<Tz>(saved_at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    saved_at.with_timezone(tz).format(DATE_FORMAT).to_string()
}

/// Render one block per post, in the given order.
///
/// ```text
/// Title: Rust Programming Language
/// Description: A language empowering everyone
/// Date: Jan. 2, 2024 3:04pm
/// Tags: rust lang
/// URL: https://www.rust-lang.org/
///
/// ```
///
/// The description line is skipped when empty. The URL line shows the href
/// as saved; a post whose href does not parse still gets its `URL:` line,
/// left blank.
pub fn render_posts<Tz>(posts: &[Post], style: OutputStyle, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut result = String::new();

    for post in posts {
        result.push_str(&format!("Title: {}\n", style.title(&post.title)));

        if !post.description.is_empty() {
            result.push_str(&format!("Description: {}\n", post.description));
        }

        result.push_str(&format!(
            "Date: {}\n",
            format_saved_at(&post.saved_at, tz)
        ));
        result.push_str(&format!("Tags: {}\n", post.tags.join(" ")));

        let link = match post.url {
            Some(_) => post.href.as_str(),
            None => "",
        };
        result.push_str(&format!("URL: {}\n\n", style.link(link)));
    }

    result
}

/// Render one `"tag": count` line per entry, in the given order.
pub fn render_tag_counts(tags: &[TagCount]) -> String {
    let mut result = String::new();
    for tag in tags {
        result.push_str(&format!("{tag}\n"));
    }
    result
}
