//! Ollama `api/generate` backend.

use async_trait::async_trait;
use blastconvert_core::{BackendCall, BackendOutcome, TranslationBackend};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::send_and_classify;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

/// Backend speaking the Ollama generate dialect (non-streaming).
#[derive(Clone)]
pub struct OllamaBackend {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl OllamaBackend {
    /// `endpoint` is the full `.../api/generate` URL.
    pub fn new(client: Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl TranslationBackend for OllamaBackend {
    async fn complete(&self, call: BackendCall) -> BackendOutcome {
        debug!(endpoint = %self.endpoint, model = %call.model, "POST api/generate");

        let body = GenerateRequest {
            model: &call.model,
            prompt: &call.prompt,
            stream: false,
            options: GenerateOptions {
                temperature: call.temperature,
            },
        };

        // Plain Ollama ignores the header; authenticating proxies in front of it do not.
        let request = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .timeout(call.timeout)
            .json(&body);

        send_and_classify(request, |decoded: GenerateResponse| decoded.response).await
    }
}
