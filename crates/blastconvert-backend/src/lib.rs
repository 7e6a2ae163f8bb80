//! HTTP translation backends for blastconvert.
//!
//! Each adapter implements [`TranslationBackend`] over a shared
//! `reqwest::Client` and reports every interaction as a classified
//! [`blastconvert_core::BackendOutcome`].

#![deny(unsafe_code)]

pub mod classify;
pub mod ollama;
pub mod openai;

use std::sync::Arc;

use anyhow::Result;
use blastconvert_core::{BackendKind, ConfigSnapshot, TranslationBackend};
use reqwest::Client;

pub use ollama::OllamaBackend;
pub use openai::OpenAiChatBackend;

/// Build the backend selected by `config`.
///
/// The client is created once and reused for every request. Per-call
/// time bounds come from [`blastconvert_core::BackendCall::timeout`].
pub fn build_backend(config: &ConfigSnapshot) -> Result<Arc<dyn TranslationBackend>> {
    let client = Client::builder().pool_max_idle_per_host(10).build()?;
    let api_key = config.api_key.clone().unwrap_or_default();

    let backend: Arc<dyn TranslationBackend> = match config.backend {
        BackendKind::OpenAi => Arc::new(OpenAiChatBackend::new(
            client,
            config.backend_url.clone(),
            api_key,
        )),
        BackendKind::Ollama => Arc::new(OllamaBackend::new(
            client,
            config.backend_url.clone(),
            api_key,
        )),
    };

    tracing::info!(backend = %config.backend, url = %config.backend_url, "Translation backend ready");
    Ok(backend)
}
