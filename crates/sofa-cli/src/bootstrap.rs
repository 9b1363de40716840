//! CLI bootstrap - the composition root.
//!
//! Turns parsed arguments into the explicit configuration the adapters need
//! and installs the tracing subscriber. Handlers build the fetcher and
//! service from this configuration.

use std::time::Duration;

use sofa_feed::FeedClientConfig;
use tracing_subscriber::EnvFilter;

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Feed client settings (URL, user agent, timeout, cache directory).
    pub feed: FeedClientConfig,
}

impl CliConfig {
    /// Apply command-line (or environment) overrides on top of the defaults.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut feed = FeedClientConfig::new();
        if let Some(url) = &cli.feed_url {
            feed = feed.with_feed_url(url.clone());
        }
        if let Some(agent) = &cli.user_agent {
            feed = feed.with_user_agent(agent.clone());
        }
        if let Some(secs) = cli.timeout_secs {
            feed = feed.with_timeout(Duration::from_secs(secs));
        }
        if let Some(dir) = &cli.cache_dir {
            feed = feed.with_cache_dir(dir.clone());
        }
        Self { feed }
    }
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr so stdout only carries the result. `RUST_LOG` wins over
/// the defaults (`warn`, or `debug` with `--verbose`).
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn test_defaults_without_overrides() {
        let cli = Cli::parse_from(["sofa-compat", "paths"]);
        let config = CliConfig::from_cli(&Cli {
            feed_url: None,
            cache_dir: None,
            timeout_secs: None,
            user_agent: None,
            ..cli
        });

        assert_eq!(config.feed.feed_url(), sofa_feed::DEFAULT_FEED_URL);
        assert_eq!(config.feed.user_agent(), sofa_feed::DEFAULT_USER_AGENT);
        assert_eq!(config.feed.timeout(), Duration::from_secs(30));
        assert_eq!(
            config.feed.cache_dir(),
            Path::new(sofa_feed::DEFAULT_CACHE_DIR)
        );
    }

    #[test]
    fn test_overrides_are_applied() {
        let cli = Cli::parse_from([
            "sofa-compat",
            "--feed-url",
            "http://localhost:9999/feed.json",
            "--user-agent",
            "fleet-check/2.0",
            "--timeout-secs",
            "3",
            "--cache-dir",
            "/tmp/sofa-cache",
        ]);
        let config = CliConfig::from_cli(&cli);

        assert_eq!(config.feed.feed_url(), "http://localhost:9999/feed.json");
        assert_eq!(config.feed.user_agent(), "fleet-check/2.0");
        assert_eq!(config.feed.timeout(), Duration::from_secs(3));
        assert_eq!(config.feed.cache_dir(), Path::new("/tmp/sofa-cache"));
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing(false);
        init_tracing(true);
    }
}
