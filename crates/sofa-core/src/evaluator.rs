//! Compatibility evaluator.
//!
//! Turns host facts plus a raw feed body into an [`EvaluationResult`].
//! Versions are compared as exact strings, exactly as the feed labels them.

use crate::domain::{Compatibility, EvaluationResult, FeedDocument, HostFacts, Status};
use crate::error::FeedParseError;

/// Substring identifying a virtualized Mac model.
pub const VIRTUAL_MAC_MARKER: &str = "VirtualMac";

/// Model looked up in place of a virtual machine's synthetic model (M1 Mac mini).
pub const VIRTUAL_MAC_REFERENCE_MODEL: &str = "Macmini9,1";

/// `latest_compatible_macos` value for hardware missing from the feed.
pub const UNSUPPORTED_LABEL: &str = "Unsupported";

/// Map a virtual machine's model identifier to the reference model.
///
/// Any identifier containing [`VIRTUAL_MAC_MARKER`] is replaced; everything
/// else is returned unchanged.
pub fn normalize_model_identifier(model: &str) -> &str {
    if model.contains(VIRTUAL_MAC_MARKER) {
        VIRTUAL_MAC_REFERENCE_MODEL
    } else {
        model
    }
}

/// Evaluate `host` against a raw feed body.
pub fn evaluate(host: &HostFacts, feed: &[u8]) -> Result<EvaluationResult, FeedParseError> {
    let document = FeedDocument::from_slice(feed)?;
    let latest_macos = document.latest_os()?;

    let model_identifier = normalize_model_identifier(&host.model_identifier);

    let (latest_compatible_macos, mut status) =
        match document.latest_supported_os(model_identifier)? {
            Some(os) => (os, Status::Pass),
            None => (UNSUPPORTED_LABEL.to_string(), Status::UnsupportedHardware),
        };

    let is_compatible = latest_macos == latest_compatible_macos;
    if !is_compatible && status != Status::UnsupportedHardware {
        status = Status::Fail;
    }

    tracing::debug!(
        model = model_identifier,
        latest = %latest_macos,
        latest_compatible = %latest_compatible_macos,
        %status,
        "Evaluated host against feed"
    );

    Ok(EvaluationResult {
        system_version: host.system_version.clone(),
        system_os_major: host.os_major().to_string(),
        model_identifier: model_identifier.to_string(),
        latest_macos,
        latest_compatible_macos,
        is_compatible: Compatibility::from(is_compatible),
        status,
    })
}
