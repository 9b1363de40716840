//! Compatibility service - produces the single result row.
//!
//! Every call to [`CompatibilityService::check`] yields exactly one
//! [`EvaluationResult`], whichever failure path is taken.

use std::sync::Arc;

use crate::domain::{EvaluationResult, HostFacts};
use crate::evaluator::evaluate;
use crate::ports::FeedSource;

/// Orchestrates feed retrieval and evaluation.
pub struct CompatibilityService {
    source: Arc<dyn FeedSource>,
}

impl CompatibilityService {
    /// Create a service reading the feed from `source`.
    pub fn new(source: Arc<dyn FeedSource>) -> Self {
        Self { source }
    }

    /// Check `host` against the current feed.
    pub async fn check(&self, host: &HostFacts) -> EvaluationResult {
        let Some(body) = self.source.feed_body().await else {
            tracing::error!("No SOFA feed data available (fresh or cached)");
            return EvaluationResult::unavailable(host);
        };

        match evaluate(host, &body) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, "Failed to parse SOFA feed");
                EvaluationResult::parse_error(host, &e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Compatibility, Status};
    use crate::ports::MockFeedSource;
    use serde_json::json;

    fn service_returning(body: Option<Vec<u8>>) -> CompatibilityService {
        let mut source = MockFeedSource::new();
        source
            .expect_feed_body()
            .times(1)
            .returning(move || body.clone());
        CompatibilityService::new(Arc::new(source))
    }

    fn feed_body() -> Vec<u8> {
        serde_json::to_vec(&json!({
            "OSVersions": [{"OSVersion": "14.5"}],
            "Models": {"Mac14,7": {"SupportedOS": ["14.5"]}}
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_no_data_yields_unavailable_row() {
        let service = service_returning(None);
        let host = HostFacts::new("14.5", "Mac14,7");

        let row = service.check(&host).await;
        assert_eq!(row.status, Status::CouldNotObtainData);
        assert_eq!(row.is_compatible, Compatibility::Unknown);
        assert_eq!(row.latest_macos, "Unknown");
        assert_eq!(row.latest_compatible_macos, "Unknown");
        assert_eq!(row.system_os_major, "14");
    }

    #[tokio::test]
    async fn test_unparsable_body_yields_error_row() {
        let service = service_returning(Some(b"not json".to_vec()));
        let host = HostFacts::new("14.5", "Mac14,7");

        let row = service.check(&host).await;
        assert!(row.status.to_string().starts_with("Error parsing data: "));
        assert_eq!(row.latest_macos, "Error");
        assert_eq!(row.latest_compatible_macos, "Error");
        assert_eq!(row.is_compatible, Compatibility::Unknown);
    }

    #[tokio::test]
    async fn test_valid_body_yields_evaluation_verbatim() {
        let service = service_returning(Some(feed_body()));
        let host = HostFacts::new("14.5", "Mac14,7");

        let row = service.check(&host).await;
        assert_eq!(row, evaluate(&host, &feed_body()).unwrap());
        assert_eq!(row.status, Status::Pass);
        assert_eq!(row.is_compatible, Compatibility::Compatible);
    }

    #[tokio::test]
    async fn test_virtual_mac_not_remapped_on_failure_rows() {
        let service = service_returning(None);
        let host = HostFacts::new("15.1", "VirtualMac2,1");

        let row = service.check(&host).await;
        assert_eq!(row.model_identifier, "VirtualMac2,1");
    }
}
