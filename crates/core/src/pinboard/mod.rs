//! Pinboard (pinboard.in) transformations
//!
//! The pipeline runs wire → [`normalize`] → [`tags`] or [`posts`] → [`render`].
//! Everything here is I/O free; the `haystack` binary owns the HTTP client and
//! decides whether stdout is an interactive terminal.

pub mod auth;
pub mod model;
pub mod normalize;
pub mod posts;
pub mod render;
pub mod tags;
pub mod wire;

pub use auth::Credentials;
pub use model::{Post, TagCount};
pub use render::OutputStyle;
