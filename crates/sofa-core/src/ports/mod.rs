//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core needs from the outside world. Adapters
//! (`sofa-feed`, `sofa-cli`) provide the implementations.

mod feed_source;
mod host_probe;

pub use feed_source::FeedSource;
pub use host_probe::{HostProbe, HostProbeError, HostProbeResult};

#[cfg(test)]
pub use feed_source::MockFeedSource;
