//! HTTP backend abstraction for the feed request.
//!
//! The fetcher only needs one operation, a conditional GET. Putting it behind
//! a trait lets the fetcher's cache logic be tested against canned responses;
//! production uses reqwest.

use async_trait::async_trait;
use reqwest::header::{ETAG, IF_NONE_MATCH};
use url::Url;

use crate::config::FeedClientConfig;
use crate::error::FeedResult;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Response to a conditional GET, reduced to what the fetcher inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// `ETag` header, if the server sent one
    pub etag: Option<String>,
    /// Response body; only read for 2xx responses
    pub body: Vec<u8>,
}

/// Trait for HTTP backends that can perform a conditional GET.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET `url`, sending `If-None-Match: <token>` when a token is given.
    ///
    /// Any status code is returned as `Ok`; only transport failures are errors.
    async fn conditional_get(&self, url: &Url, if_none_match: Option<&str>)
    -> FeedResult<HttpResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Single attempt per call with the configured timeout and user agent.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &FeedClientConfig) -> FeedResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn conditional_get(
        &self,
        url: &Url,
        if_none_match: Option<&str>,
    ) -> FeedResult<HttpResponse> {
        let mut request = self.client.get(url.as_str());
        if let Some(token) = if_none_match {
            request = request.header(IF_NONE_MATCH, token);
        }

        let response = request.send().await?;
        let status = response.status();
        let etag = response
            .headers()
            .get(ETAG)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string);

        let body = if status.is_success() {
            response.bytes().await?.to_vec()
        } else {
            Vec::new()
        };

        Ok(HttpResponse {
            status: status.as_u16(),
            etag,
            body,
        })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
