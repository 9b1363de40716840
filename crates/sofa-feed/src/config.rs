//! Public configuration for the feed client.
//!
//! Everything the fetcher needs is passed in explicitly through this value;
//! there is no process-wide state.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// SOFA macOS data feed.
pub const DEFAULT_FEED_URL: &str = "https://sofafeed.macadmins.io/v1/macos_data_feed.json";

/// User agent sent with every feed request.
pub const DEFAULT_USER_AGENT: &str = "SOFA-osquery-macOSCompatibilityCheck/1.0";

/// Directory holding the cached feed and its ETag.
pub const DEFAULT_CACHE_DIR: &str = "/private/var/tmp/sofa";

/// File name of the cached feed body.
pub const BODY_FILE_NAME: &str = "macos_data_feed.json";

/// File name of the cached revalidation token.
pub const TOKEN_FILE_NAME: &str = "macos_data_feed_etag.txt";

/// Configuration for the feed client.
///
/// # Example
///
/// ```
/// use sofa_feed::FeedClientConfig;
/// use std::time::Duration;
///
/// let config = FeedClientConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_cache_dir("/tmp/sofa");
/// assert_eq!(config.body_path().to_str(), Some("/tmp/sofa/macos_data_feed.json"));
/// ```
#[derive(Debug, Clone)]
pub struct FeedClientConfig {
    /// URL of the feed document
    pub(crate) feed_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Directory for the cached body and token
    pub(crate) cache_dir: PathBuf,
}

impl Default for FeedClientConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
        }
    }
}

impl FeedClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the feed URL.
    #[must_use]
    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the cache directory.
    #[must_use]
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Path of the cached feed body.
    pub fn body_path(&self) -> PathBuf {
        self.cache_dir.join(BODY_FILE_NAME)
    }

    /// Path of the cached revalidation token.
    pub fn token_path(&self) -> PathBuf {
        self.cache_dir.join(TOKEN_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FeedClientConfig::new();
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert_eq!(config.user_agent, "SOFA-osquery-macOSCompatibilityCheck/1.0");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.cache_dir, PathBuf::from("/private/var/tmp/sofa"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = FeedClientConfig::new()
            .with_feed_url("http://127.0.0.1:8080/feed.json")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5))
            .with_cache_dir("/tmp/sofa-test");

        assert_eq!(config.feed_url(), "http://127.0.0.1:8080/feed.json");
        assert_eq!(config.user_agent(), "test-agent");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.cache_dir(), Path::new("/tmp/sofa-test"));
    }

    #[test]
    fn test_cache_file_paths() {
        let config = FeedClientConfig::new();
        assert_eq!(
            config.body_path(),
            PathBuf::from("/private/var/tmp/sofa/macos_data_feed.json")
        );
        assert_eq!(
            config.token_path(),
            PathBuf::from("/private/var/tmp/sofa/macos_data_feed_etag.txt")
        );
    }
}
