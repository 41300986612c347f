use crate::prelude::*;
use clap::Parser;
use std::time::Duration;

mod error;
mod pinboard;
mod prelude;

/// Exit code for malformed arguments and `--help`.
const USAGE_EXIT_CODE: i32 = 2;

#[derive(Debug, clap::Parser)]
#[command(
    name = "haystack",
    author,
    version,
    about = "haystack - a Pinboard search client",
    long_about = "haystack - a Pinboard search client

Lists saved pages carrying all of the given tags, oldest first. With
--tag-search, lists tags similar to the given terms, most used first.

All options may be set by an environment variable, like $PINBOARD_AUTH_TOKEN."
)]
pub struct App {
    /// Tags to search for
    #[arg(value_name = "TAGS")]
    pub tags: Vec<String>,

    /// Search for similar tags, rather than saved pages
    #[arg(short = 't', long, env = "PINBOARD_TAG_SEARCH", default_value = "false")]
    pub tag_search: bool,

    #[clap(flatten)]
    pub auth: pinboard::AuthOptions,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Timeout for the query (e.g. "5s", "500ms", "1h", "1m30s")
    #[arg(
        long,
        env = "PINBOARD_TIMEOUT",
        default_value = "5s",
        value_parser = haystack_core::duration::parse_duration
    )]
    timeout: Duration,

    /// Pinboard API base URL
    #[arg(long, env = "PINBOARD_BASE_URL", default_value = pinboard::DEFAULT_BASE_URL)]
    base_url: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Whether to display additional information.
    #[arg(short, long, env = "HAYSTACK_VERBOSE", default_value = "false")]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = match App::try_parse() {
        Ok(app) => app,
        Err(err) if err.kind() == clap::error::ErrorKind::DisplayVersion => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(USAGE_EXIT_CODE);
        }
    };

    crate::pinboard::run(app).await
}
