#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{BackendKind, ConfigError, ConfigSnapshot, PLACEHOLDER_API_KEY};
pub use domain::{
    ConversionRequest, ConversionResult, ConversionStatus, EMPTY_SOURCE_MESSAGE, ModelCatalog,
    TIMEOUT_MESSAGE, ValidationError,
};
pub use ports::{BackendCall, BackendOutcome, TranslationBackend};
pub use services::{ConversionOrchestrator, DEMO_PLACEHOLDER};
