#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the main.rs binary
use dotenvy as _;
use tokio as _;

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod probe;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, init_tracing};
pub use commands::{CheckArgs, Commands};
pub use parser::Cli;
pub use probe::CommandHostProbe;
