//! Port trait implementation for `FeedFetcher`.
//!
//! Adapts the fetcher's [`FetchOutcome`](crate::FetchOutcome) to the core
//! `FeedSource` port, which only cares whether a body is available.

use async_trait::async_trait;
use sofa_core::ports::FeedSource;

use crate::fetcher::FeedFetcher;
use crate::http::HttpBackend;

#[async_trait]
impl<B: HttpBackend> FeedSource for FeedFetcher<B> {
    async fn feed_body(&self) -> Option<Vec<u8>> {
        self.fetch().await.into_body()
    }
}
