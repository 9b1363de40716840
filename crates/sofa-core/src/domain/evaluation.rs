//! The single result row produced by every compatibility check.

use std::fmt;

use serde::Serialize;

use super::host::HostFacts;
use crate::error::FeedParseError;

/// Placeholder for version columns when no feed could be obtained.
const UNKNOWN_LABEL: &str = "Unknown";
/// Placeholder for version columns when the feed could not be parsed.
const ERROR_LABEL: &str = "Error";

/// Tri-state compatibility verdict.
///
/// Serialized as `true`, `false` or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "Option<bool>")]
pub enum Compatibility {
    /// Host hardware supports the latest OS release.
    Compatible,
    /// Host hardware does not support the latest OS release.
    Incompatible,
    /// No verdict could be reached.
    Unknown,
}

impl Compatibility {
    /// Integer column form: `1`, `0` or `-1`.
    pub const fn as_column(self) -> i8 {
        match self {
            Self::Compatible => 1,
            Self::Incompatible => 0,
            Self::Unknown => -1,
        }
    }
}

impl From<bool> for Compatibility {
    fn from(compatible: bool) -> Self {
        if compatible {
            Self::Compatible
        } else {
            Self::Incompatible
        }
    }
}

impl From<Compatibility> for Option<bool> {
    fn from(value: Compatibility) -> Self {
        match value {
            Compatibility::Compatible => Some(true),
            Compatibility::Incompatible => Some(false),
            Compatibility::Unknown => None,
        }
    }
}

/// Outcome of a check as reported in the `status` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Status {
    /// Latest supported release equals the latest release.
    Pass,
    /// Hardware is listed but cannot run the latest release.
    Fail,
    /// Hardware model is not listed (or lists no releases).
    UnsupportedHardware,
    /// Neither a fresh nor a cached feed was available.
    CouldNotObtainData,
    /// The feed body could not be parsed; carries the parser detail.
    ParseError(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("Pass"),
            Self::Fail => f.write_str("Fail"),
            Self::UnsupportedHardware => f.write_str("Unsupported Hardware"),
            Self::CouldNotObtainData => f.write_str("Could not obtain data"),
            Self::ParseError(detail) => write!(f, "Error parsing data: {detail}"),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.to_string()
    }
}

/// One compatibility row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub system_version: String,
    pub system_os_major: String,
    /// Model used for the lookup; virtual machines report the reference model.
    pub model_identifier: String,
    pub latest_macos: String,
    pub latest_compatible_macos: String,
    pub is_compatible: Compatibility,
    pub status: Status,
}

impl EvaluationResult {
    /// Row for when no feed body was available at all.
    pub fn unavailable(host: &HostFacts) -> Self {
        Self::placeholder(host, UNKNOWN_LABEL, Status::CouldNotObtainData)
    }

    /// Row for when the feed body could not be parsed.
    pub fn parse_error(host: &HostFacts, err: &FeedParseError) -> Self {
        Self::placeholder(host, ERROR_LABEL, Status::ParseError(err.to_string()))
    }

    fn placeholder(host: &HostFacts, label: &str, status: Status) -> Self {
        Self {
            system_version: host.system_version.clone(),
            system_os_major: host.os_major().to_string(),
            model_identifier: host.model_identifier.clone(),
            latest_macos: label.to_string(),
            latest_compatible_macos: label.to_string(),
            is_compatible: Compatibility::Unknown,
            status,
        }
    }

    /// Column name and rendered value pairs, in column order.
    pub fn columns(&self) -> [(&'static str, String); 7] {
        [
            ("system_version", self.system_version.clone()),
            ("system_os_major", self.system_os_major.clone()),
            ("model_identifier", self.model_identifier.clone()),
            ("latest_macos", self.latest_macos.clone()),
            ("latest_compatible_macos", self.latest_compatible_macos.clone()),
            ("is_compatible", self.is_compatible.as_column().to_string()),
            ("status", self.status.to_string()),
        ]
    }
}
