//! Error types for feed retrieval.
//!
//! None of these escape the fetcher: every failure is logged and folded into
//! a [`FetchOutcome`](crate::FetchOutcome).

use thiserror::Error;

/// Result type alias for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors related to fetching the SOFA feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The server answered with a status other than 2xx or 304.
    #[error("Feed request failed with status {status}: {url}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The server answered 2xx with an empty body.
    #[error("Feed request returned status {status} with an empty body")]
    EmptyBody {
        /// HTTP status code
        status: u16,
    },

    /// The server answered 304 but there is no cached body to reuse.
    #[error("Server reported the feed unchanged but no cached copy exists")]
    NotModifiedWithoutCache,

    /// Network, TLS, timeout or HTTP client error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the transport failure
        message: String,
    },

    /// The configured feed URL could not be parsed.
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}
