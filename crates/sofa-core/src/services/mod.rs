//! Core services - orchestration over ports and domain logic.

mod compatibility;

pub use compatibility::CompatibilityService;
