//! Feed parsing errors.
//!
//! The display text of these errors is embedded verbatim in the
//! `Error parsing data: <detail>` status, so it must stay free of paths.

use thiserror::Error;

/// Errors raised while reading a feed body or the entries the check needs.
#[derive(Debug, Error)]
pub enum FeedParseError {
    /// The body, or an entry the check reads, does not have the expected shape.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// The `OSVersions` list is present but empty.
    #[error("feed contains no OS versions")]
    NoOsVersions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_keeps_parser_detail() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let expected = json_err.to_string();

        let err: FeedParseError = json_err.into();
        assert_eq!(err.to_string(), expected);
        assert!(expected.contains("line 1"));
    }

    #[test]
    fn test_no_os_versions_message() {
        assert_eq!(
            FeedParseError::NoOsVersions.to_string(),
            "feed contains no OS versions"
        );
    }
}
