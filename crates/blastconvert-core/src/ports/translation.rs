//! Translation backend port.
//!
//! The orchestrator talks to the remote model only through this trait.
//! Implementations classify every raw interaction into a
//! [`BackendOutcome`] and never return errors or panic on bad input.

use std::time::Duration;

use async_trait::async_trait;

/// One call to the remote model.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendCall {
    /// Effective model id.
    pub model: String,
    /// Combined instruction: template, marker, then source code.
    pub prompt: String,
    /// Decoding temperature hint.
    pub temperature: f32,
    /// Upper bound for the whole call.
    pub timeout: Duration,
}

/// Classified result of a backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendOutcome {
    /// Well-formed completion, already trimmed.
    Success(String),
    /// Backend rejected the credentials (HTTP 401).
    Unauthorized,
    /// Call exceeded its time bound.
    Timeout,
    /// Transport failure or unexpected upstream status.
    NetworkFailure(String),
    /// Success status, but the completion field was missing.
    MalformedResponse,
}

impl BackendOutcome {
    /// Short label for logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::Unauthorized => "unauthorized",
            Self::Timeout => "timeout",
            Self::NetworkFailure(_) => "network_failure",
            Self::MalformedResponse => "malformed_response",
        }
    }
}

/// Port for the remote code-translation model.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Perform one bounded call. At most one upstream request per invocation.
    async fn complete(&self, call: BackendCall) -> BackendOutcome;
}
