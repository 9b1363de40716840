//! Feed source port.
//!
//! The core never talks HTTP or touches the cache directory itself; it asks a
//! `FeedSource` for the body to evaluate. The production implementation lives
//! in `sofa-feed`.

use async_trait::async_trait;

/// Port yielding the SOFA feed body for one evaluation.
///
/// Implementations decide where the body comes from (network, revalidated
/// cache, stale cache). Failures are handled inside the adapter; callers only
/// see whether a body is available.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Return the feed body, or `None` if neither a fresh nor a cached copy exists.
    async fn feed_body(&self) -> Option<Vec<u8>>;
}
