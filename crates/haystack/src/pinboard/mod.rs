use crate::prelude::{eprintln, *};
use haystack_core::pinboard::{Credentials, OutputStyle};
use serde::Serialize;
use std::io::{IsTerminal, Write};

pub mod client;
pub mod posts;
pub mod tags;

#[cfg(test)]
mod test_support;

pub use client::{PinboardClient, DEFAULT_BASE_URL};

/// Pinboard credentials. Username and password take precedence over a token.
#[derive(Debug, Clone, clap::Args)]
pub struct AuthOptions {
    /// Username
    #[arg(long, env = "PINBOARD_USER")]
    pub user: Option<String>,

    /// Password
    #[arg(long, env = "PINBOARD_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Auth token, see https://pinboard.in/settings/password
    #[arg(
        long,
        env = "PINBOARD_AUTH_TOKEN",
        value_name = "TOKEN",
        hide_env_values = true
    )]
    pub auth_token: Option<String>,
}

impl AuthOptions {
    pub fn credentials(&self) -> Credentials {
        Credentials::resolve(
            self.user.as_deref(),
            self.password.as_deref(),
            self.auth_token.as_deref(),
        )
    }
}

/// Module entry point
pub async fn run(app: crate::App) -> Result<()> {
    let credentials = app.auth.credentials();

    if app.global.verbose {
        eprintln!("Pinboard API Base: {}", app.global.base_url);
        eprintln!("Auth mode: {}", credentials.mode());
        eprintln!("Timeout: {:?}", app.global.timeout);
        eprintln!();
    }

    let client = PinboardClient::new(&app.global.base_url, credentials, app.global.timeout)?;

    if app.tag_search {
        tags::run(&client, &app.tags, &app.global).await
    } else {
        posts::run(&client, &app.tags, &app.global).await
    }
}

/// Decide styling for a stream, once per render.
pub fn output_style<S: IsTerminal>(stream: &S) -> OutputStyle {
    OutputStyle::from_interactive(stream.is_terminal())
}

/// Serialize results as pretty JSON
pub fn format_json<T: Serialize>(items: &[T]) -> Result<String> {
    serde_json::to_string_pretty(items).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Write rendered output to `out` in one go.
pub fn write_output(out: &mut impl Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .context("Failed to write output")
}
