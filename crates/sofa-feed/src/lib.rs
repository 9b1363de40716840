#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod cache;
mod config;
mod error;
mod fetcher;
mod http;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Cache
pub use cache::{CacheError, CacheStore};

// Configuration
pub use config::{
    BODY_FILE_NAME, DEFAULT_CACHE_DIR, DEFAULT_FEED_URL, DEFAULT_USER_AGENT, FeedClientConfig,
    TOKEN_FILE_NAME,
};

// Errors
pub use error::{FeedError, FeedResult};

// Fetcher
pub use fetcher::{DefaultFeedFetcher, FeedFetcher, FetchOutcome};

// HTTP backend seam
pub use http::{HttpBackend, HttpResponse, ReqwestBackend};

// Only exercised by the end-to-end tests under tests/
#[cfg(test)]
use axum as _;
