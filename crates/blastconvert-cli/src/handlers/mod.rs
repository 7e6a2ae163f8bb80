//! Command handlers.
//!
//! Handlers are thin: they read their inputs, call into the axum crate or
//! the orchestrator, and format output for the terminal.

pub mod convert;
pub mod event;
pub mod models;
pub mod serve;
