//! View of the SOFA macOS data feed.
//!
//! Only the top-level shape is checked on parse. Individual entries stay as
//! raw JSON until the evaluator asks for them, so a malformed entry the check
//! never reads cannot spoil the verdict for every host.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::FeedParseError;

/// The parts of `macos_data_feed.json` the evaluator needs.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedDocument {
    /// OS releases, newest first.
    #[serde(rename = "OSVersions")]
    os_versions: Vec<Value>,
    /// Hardware model identifier to support record.
    #[serde(rename = "Models")]
    models: Map<String, Value>,
}

/// One entry of the `OSVersions` list.
#[derive(Debug, Clone, Deserialize)]
pub struct OsVersionRecord {
    /// Release label, e.g. `Sequoia 15`.
    #[serde(rename = "OSVersion")]
    pub os_version: String,
}

/// Support record for a single hardware model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelRecord {
    /// Supported release labels, newest first. Missing or `null` means none.
    #[serde(rename = "SupportedOS", default)]
    pub supported_os: Option<Vec<String>>,
}

impl FeedDocument {
    /// Parse a raw feed body.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, FeedParseError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Newest OS release listed in the feed.
    ///
    /// Only the first `OSVersions` entry is decoded.
    pub fn latest_os(&self) -> Result<String, FeedParseError> {
        let first = self
            .os_versions
            .first()
            .ok_or(FeedParseError::NoOsVersions)?;
        Ok(OsVersionRecord::deserialize(first)?.os_version)
    }

    /// Support record for `model`, decoding only that entry.
    ///
    /// An unlisted model and a `null` entry both yield `None`.
    pub fn model(&self, model: &str) -> Result<Option<ModelRecord>, FeedParseError> {
        match self.models.get(model) {
            None | Some(Value::Null) => Ok(None),
            Some(entry) => Ok(Some(ModelRecord::deserialize(entry)?)),
        }
    }

    /// Newest OS release supported by `model`, if the model is listed and
    /// has at least one supported release.
    pub fn latest_supported_os(&self, model: &str) -> Result<Option<String>, FeedParseError> {
        Ok(self
            .model(model)?
            .and_then(|record| record.supported_os)
            .and_then(|releases| releases.into_iter().next()))
    }
}
