//! Host facts supplied by the caller.

use serde::{Deserialize, Serialize};

/// OS version and hardware model of the host being checked.
///
/// Obtained once per invocation (see [`HostProbe`](crate::HostProbe)) and
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostFacts {
    /// Dotted OS version, e.g. `14.5`.
    pub system_version: String,
    /// Vendor hardware model identifier, e.g. `Mac14,7`.
    pub model_identifier: String,
}

impl HostFacts {
    /// Create host facts from the two raw strings.
    pub fn new(system_version: impl Into<String>, model_identifier: impl Into<String>) -> Self {
        Self {
            system_version: system_version.into(),
            model_identifier: model_identifier.into(),
        }
    }

    /// Major component of [`system_version`](Self::system_version).
    pub fn os_major(&self) -> &str {
        os_major(&self.system_version)
    }
}

/// Extract the major version: everything before the first `.`.
///
/// A version without a `.` is returned unchanged.
///
/// ```
/// use sofa_core::os_major;
///
/// assert_eq!(os_major("14.5"), "14");
/// assert_eq!(os_major("15.0.1"), "15");
/// assert_eq!(os_major("26"), "26");
/// ```
pub fn os_major(version: &str) -> &str {
    version.split_once('.').map_or(version, |(major, _)| major)
}
