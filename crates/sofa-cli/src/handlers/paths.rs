//! Paths command handler.
//!
//! Displays the resolved feed URL and cache locations for diagnostics.

use anyhow::Result;

use crate::bootstrap::CliConfig;

/// Resolved locations in `key = value` format.
pub fn format_paths(config: &CliConfig) -> String {
    let feed = &config.feed;
    format!(
        "feed_url   = {}\ncache_dir  = {}\nfeed_cache = {}\netag_cache = {}",
        feed.feed_url(),
        feed.cache_dir().display(),
        feed.body_path().display(),
        feed.token_path().display(),
    )
}

/// Execute the paths command.
pub fn execute(config: &CliConfig) -> Result<()> {
    println!("{}", format_paths(config));
    Ok(())
}
