//! Conversion request and result types.
//!
//! These types live for exactly one request. They are never persisted
//! or shared across requests.

use serde::Serialize;
use thiserror::Error;

/// Target flavor assumed when the caller does not name one.
pub const DEFAULT_TARGET_FLAVOR: &str = "typescript";

/// Message returned when the caller sends no source code.
pub const EMPTY_SOURCE_MESSAGE: &str = "No Java code provided";

/// Message returned when the backend call exceeds its time bound.
pub const TIMEOUT_MESSAGE: &str =
    "Conversion request timed out. The model backend is slow to respond, please try again.";

/// Input validation failures. These are the caller's fault and never
/// reach the backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Source code missing, empty or whitespace only.
    #[error("{}", EMPTY_SOURCE_MESSAGE)]
    EmptySource,

    /// Request body could not be decoded.
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

/// A validated conversion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    source_code: String,
    target_flavor: String,
    model: Option<String>,
}

impl ConversionRequest {
    /// Build a request, rejecting source code that is empty after trimming.
    pub fn new(source_code: impl Into<String>) -> Result<Self, ValidationError> {
        let source_code = source_code.into();
        if source_code.trim().is_empty() {
            return Err(ValidationError::EmptySource);
        }
        Ok(Self {
            source_code,
            target_flavor: DEFAULT_TARGET_FLAVOR.to_string(),
            model: None,
        })
    }

    /// Set the target flavor. Blank values keep the default.
    ///
    /// The flavor is accepted and carried but does not alter the
    /// conversion yet.
    #[must_use]
    pub fn with_target_flavor(mut self, flavor: Option<String>) -> Self {
        if let Some(flavor) = flavor.filter(|f| !f.trim().is_empty()) {
            self.target_flavor = flavor;
        }
        self
    }

    /// Set a model override. Blank values mean "use the configured default".
    #[must_use]
    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model.filter(|m| !m.trim().is_empty());
        self
    }

    pub fn source_code(&self) -> &str {
        &self.source_code
    }

    pub fn target_flavor(&self) -> &str {
        &self.target_flavor
    }

    /// The model override, if the caller supplied a non-blank one.
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }
}

/// Outcome status of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionStatus {
    Success,
    Error,
}

/// Result of one conversion.
///
/// `status == Success` iff `error_message` is `None`, and
/// `status == Error` iff `converted_code` is empty. The constructors are
/// the only way to build one, so the pairing always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    converted_code: String,
    status: ConversionStatus,
    error_message: Option<String>,
}

impl ConversionResult {
    /// A successful conversion carrying `converted_code`.
    pub fn success(converted_code: impl Into<String>) -> Self {
        Self {
            converted_code: converted_code.into(),
            status: ConversionStatus::Success,
            error_message: None,
        }
    }

    /// A failed conversion with a user-facing message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            converted_code: String::new(),
            status: ConversionStatus::Error,
            error_message: Some(message.into()),
        }
    }

    /// The retryable failure produced when the backend times out.
    pub fn timed_out() -> Self {
        Self::failure(TIMEOUT_MESSAGE)
    }

    pub fn converted_code(&self) -> &str {
        &self.converted_code
    }

    pub const fn status(&self) -> ConversionStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.status == ConversionStatus::Success
    }
}
