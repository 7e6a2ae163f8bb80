//! Core services.

pub mod orchestrator;

pub use orchestrator::{
    CONVERSION_TEMPERATURE, ConversionOrchestrator, DEMO_PLACEHOLDER, apply_fallback, build_prompt,
};
