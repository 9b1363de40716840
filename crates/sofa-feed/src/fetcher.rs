//! Conditional feed fetcher.
//!
//! One call to [`FeedFetcher::fetch`] makes at most one request and returns
//! the best body available: fresh from the server, revalidated from the
//! cache, or stale from the cache when the server cannot be reached.

use url::Url;

use crate::cache::CacheStore;
use crate::config::FeedClientConfig;
use crate::error::{FeedError, FeedResult};
use crate::http::{HttpBackend, HttpResponse, ReqwestBackend};

/// Result of one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The server sent a new, non-empty body (2xx).
    Fresh(Vec<u8>),
    /// The server confirmed the cached body is current (304).
    NotModified(Vec<u8>),
    /// The request failed; this is the last cached body.
    Stale(Vec<u8>),
    /// The request failed and nothing is cached.
    Unavailable,
}

impl FetchOutcome {
    /// The body to evaluate, if any.
    pub fn into_body(self) -> Option<Vec<u8>> {
        match self {
            Self::Fresh(body) | Self::NotModified(body) | Self::Stale(body) => Some(body),
            Self::Unavailable => None,
        }
    }
}

/// Default fetcher using the reqwest HTTP backend.
pub type DefaultFeedFetcher = FeedFetcher<ReqwestBackend>;

/// Fetches the feed through `B` and keeps the cache up to date.
pub struct FeedFetcher<B: HttpBackend> {
    backend: B,
    url: Url,
    cache: CacheStore,
}

impl DefaultFeedFetcher {
    /// Create a fetcher from the given configuration.
    pub fn new(config: &FeedClientConfig) -> FeedResult<Self> {
        let url = Url::parse(&config.feed_url)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self::with_backend(url, CacheStore::new(&config.cache_dir), backend))
    }
}

impl<B: HttpBackend> FeedFetcher<B> {
    /// Create a fetcher with a custom backend.
    pub const fn with_backend(url: Url, cache: CacheStore, backend: B) -> Self {
        Self {
            backend,
            url,
            cache,
        }
    }

    pub const fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Fetch the feed, revalidating and falling back to the cache as needed.
    pub async fn fetch(&self) -> FetchOutcome {
        let cache = match self.cache.ensure_directory() {
            Ok(()) => Some(&self.cache),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Cache directory unavailable, continuing without cache"
                );
                None
            }
        };

        let token = cache.and_then(CacheStore::read_token);
        let result = self
            .backend
            .conditional_get(&self.url, token.as_deref())
            .await;

        match result {
            Ok(response) if (200..300).contains(&response.status) && response.body.is_empty() => {
                fallback(
                    cache,
                    &FeedError::EmptyBody {
                        status: response.status,
                    },
                )
            }
            Ok(response) if (200..300).contains(&response.status) => {
                if let Some(cache) = cache {
                    store_fresh(cache, &response);
                }
                tracing::debug!(
                    status = response.status,
                    bytes = response.body.len(),
                    "Fetched fresh SOFA feed"
                );
                FetchOutcome::Fresh(response.body)
            }
            Ok(response) if response.status == 304 => {
                let Some(cache) = cache else {
                    return fallback(None, &FeedError::NotModifiedWithoutCache);
                };
                if let Some(etag) = response.etag.as_deref() {
                    store_token(cache, etag);
                }
                match cache.read_body() {
                    Some(body) => {
                        tracing::info!("Using cached SOFA feed (304 Not Modified)");
                        FetchOutcome::NotModified(body)
                    }
                    None => fallback(Some(cache), &FeedError::NotModifiedWithoutCache),
                }
            }
            Ok(response) => fallback(
                cache,
                &FeedError::UnexpectedStatus {
                    status: response.status,
                    url: self.url.to_string(),
                },
            ),
            Err(e) => fallback(cache, &e),
        }
    }
}

/// Persist a 2xx response: body first, token only once the body is on disk.
fn store_fresh(cache: &CacheStore, response: &HttpResponse) {
    if let Err(e) = cache.write_body(&response.body) {
        tracing::warn!(error = %e, "Failed to cache SOFA feed body");
        return;
    }

    match response.etag.as_deref() {
        Some(etag) => store_token(cache, etag),
        None => {
            if let Err(e) = cache.clear_token() {
                tracing::warn!(error = %e, "Failed to clear stale SOFA feed ETag");
            }
        }
    }
}

fn store_token(cache: &CacheStore, etag: &str) {
    if let Err(e) = cache.write_token(etag) {
        tracing::warn!(error = %e, "Failed to cache SOFA feed ETag");
    }
}

fn fallback(cache: Option<&CacheStore>, reason: &FeedError) -> FetchOutcome {
    match cache.and_then(CacheStore::read_body) {
        Some(body) => {
            tracing::warn!(error = %reason, "Failed to fetch new SOFA feed, using cached data");
            FetchOutcome::Stale(body)
        }
        None => {
            tracing::error!(error = %reason, "Failed to fetch SOFA feed and no cache available");
            FetchOutcome::Unavailable
        }
    }
}
