//! Command handlers.
//!
//! Each handler takes the bootstrap configuration plus its own arguments,
//! wires the adapters it needs and prints to stdout.

pub mod check;
pub mod paths;
