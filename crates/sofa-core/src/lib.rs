#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod evaluator;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    Compatibility, EvaluationResult, FeedDocument, HostFacts, ModelRecord, OsVersionRecord,
    Status, os_major,
};
pub use error::FeedParseError;
pub use evaluator::{
    UNSUPPORTED_LABEL, VIRTUAL_MAC_MARKER, VIRTUAL_MAC_REFERENCE_MODEL, evaluate,
    normalize_model_identifier,
};
pub use ports::{FeedSource, HostProbe, HostProbeError, HostProbeResult};
pub use services::CompatibilityService;
