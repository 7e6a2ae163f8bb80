//! Command-line front end for blastconvert.
//!
//! `main.rs` is the composition root; this library holds the parser and
//! the command handlers so they can be tested without a process.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by main.rs binary
use dotenvy as _;
use tracing_subscriber as _;

pub mod commands;
pub mod handlers;
pub mod parser;

pub use commands::{Commands, RouteArg};
pub use parser::Cli;
