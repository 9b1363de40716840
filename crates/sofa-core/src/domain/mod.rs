//! Domain types for the compatibility check.
//!
//! - [`HostFacts`]: the two facts describing the host
//! - [`FeedDocument`]: the parsed SOFA feed
//! - [`EvaluationResult`]: the single output row

mod evaluation;
mod feed;
mod host;

pub use evaluation::{Compatibility, EvaluationResult, Status};
pub use feed::{FeedDocument, ModelRecord, OsVersionRecord};
pub use host::{HostFacts, os_major};
