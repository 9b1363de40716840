//! Main CLI parser and top-level argument handling.
//!
//! Global options configure the feed client and may also come from the
//! environment (or a `.env` file loaded before parsing).

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Check this Mac against the SOFA macOS compatibility feed.
#[derive(Parser, Debug)]
#[command(name = "sofa-compat")]
#[command(about = "Check whether this Mac's hardware supports the latest macOS release")]
#[command(version)]
pub struct Cli {
    /// Feed URL to query
    #[arg(long = "feed-url", env = "SOFA_FEED_URL", global = true)]
    pub feed_url: Option<String>,

    /// Directory for the cached feed and its ETag
    #[arg(long = "cache-dir", env = "SOFA_CACHE_DIR", global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long = "timeout-secs", env = "SOFA_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// User agent sent with the feed request
    #[arg(long = "user-agent", env = "SOFA_USER_AGENT", global = true)]
    pub user_agent: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "sofa-compat",
            "--verbose",
            "--cache-dir",
            "/tmp/sofa",
            "--timeout-secs",
            "5",
            "paths",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.cache_dir, Some(PathBuf::from("/tmp/sofa")));
        assert_eq!(cli.timeout_secs, Some(5));
        assert_eq!(cli.command, Some(Commands::Paths));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from([
            "sofa-compat",
            "check",
            "--feed-url",
            "http://127.0.0.1:8080/feed.json",
        ]);
        assert_eq!(
            cli.feed_url.as_deref(),
            Some("http://127.0.0.1:8080/feed.json")
        );
    }

    #[test]
    fn test_no_command_is_allowed() {
        let cli = Cli::parse_from(["sofa-compat"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_rejects_non_numeric_timeout() {
        assert!(Cli::try_parse_from(["sofa-compat", "--timeout-secs", "soon"]).is_err());
    }
}
