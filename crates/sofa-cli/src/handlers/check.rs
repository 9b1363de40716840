//! Check command handler.
//!
//! Probe → fetch → evaluate → print. Once host facts are known a row is
//! always printed; feed problems show up in its `status` column.

use std::sync::Arc;

use anyhow::{Context, Result};

use sofa_core::{CompatibilityService, EvaluationResult, HostFacts, HostProbe};
use sofa_feed::DefaultFeedFetcher;

use crate::bootstrap::CliConfig;
use crate::commands::CheckArgs;
use crate::presentation::{format_row, format_row_json};
use crate::probe::resolve_host_facts;

/// Execute the check command.
pub async fn execute(config: &CliConfig, args: &CheckArgs, probe: &dyn HostProbe) -> Result<()> {
    let host = resolve_host_facts(
        probe,
        args.system_version.clone(),
        args.model_identifier.clone(),
    )
    .context("Failed to determine host facts")?;

    let row = run_check(config, &host).await?;

    if args.json {
        println!("{}", format_row_json(&row)?);
    } else {
        println!("{}", format_row(&row));
    }
    Ok(())
}

/// Fetch the feed for `config` and evaluate `host` against it.
pub async fn run_check(config: &CliConfig, host: &HostFacts) -> Result<EvaluationResult> {
    let fetcher =
        DefaultFeedFetcher::new(&config.feed).context("Invalid feed client configuration")?;
    let service = CompatibilityService::new(Arc::new(fetcher));

    tracing::debug!(
        url = config.feed.feed_url(),
        system_version = %host.system_version,
        model_identifier = %host.model_identifier,
        "Checking host against SOFA feed"
    );

    Ok(service.check(host).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sofa_core::{Compatibility, Status};
    use sofa_feed::{CacheStore, FeedClientConfig};
    use std::time::Duration;
    use tempfile::TempDir;

    // Nothing listens on the discard port, so every request fails fast.
    const UNREACHABLE_URL: &str = "http://127.0.0.1:9/v1/macos_data_feed.json";

    fn config(tmp: &TempDir, url: &str) -> CliConfig {
        CliConfig {
            feed: FeedClientConfig::new()
                .with_feed_url(url)
                .with_timeout(Duration::from_secs(2))
                .with_cache_dir(tmp.path().join("sofa")),
        }
    }

    #[tokio::test]
    async fn test_unreachable_feed_without_cache() {
        let tmp = TempDir::new().unwrap();
        let host = HostFacts::new("14.5", "Mac14,7");

        let row = run_check(&config(&tmp, UNREACHABLE_URL), &host).await.unwrap();
        assert_eq!(row, EvaluationResult::unavailable(&host));
    }

    #[tokio::test]
    async fn test_unreachable_feed_uses_stale_cache() {
        let tmp = TempDir::new().unwrap();
        let cache = CacheStore::new(tmp.path().join("sofa"));
        cache.ensure_directory().unwrap();
        cache
            .write_body(
                br#"{"OSVersions":[{"OSVersion":"Sonoma 14"}],
                    "Models":{"Mac14,7":{"SupportedOS":["Sonoma 14"]}}}"#,
            )
            .unwrap();

        let host = HostFacts::new("14.5", "Mac14,7");
        let row = run_check(&config(&tmp, UNREACHABLE_URL), &host).await.unwrap();

        assert_eq!(row.latest_macos, "Sonoma 14");
        assert_eq!(row.is_compatible, Compatibility::Compatible);
        assert_eq!(row.status, Status::Pass);
    }

    #[tokio::test]
    async fn test_invalid_feed_url_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let host = HostFacts::new("14.5", "Mac14,7");

        assert!(run_check(&config(&tmp, "not a url"), &host).await.is_err());
    }
}
