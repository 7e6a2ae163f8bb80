//! OpenAI-compatible `chat/completions` backend.

use async_trait::async_trait;
use blastconvert_core::{BackendCall, BackendOutcome, TranslationBackend};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::send_and_classify;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    fn into_completion(self) -> Option<String> {
        self.choices.into_iter().next()?.message?.content
    }
}

/// Backend speaking the OpenAI chat-completions dialect.
#[derive(Clone)]
pub struct OpenAiChatBackend {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl OpenAiChatBackend {
    /// `endpoint` is the full `.../chat/completions` URL.
    pub fn new(client: Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl TranslationBackend for OpenAiChatBackend {
    async fn complete(&self, call: BackendCall) -> BackendOutcome {
        debug!(endpoint = %self.endpoint, model = %call.model, "POST chat/completions");

        let body = ChatRequest {
            model: &call.model,
            messages: [ChatMessage {
                role: "user",
                content: &call.prompt,
            }],
            temperature: call.temperature,
        };

        let request = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .timeout(call.timeout)
            .json(&body);

        send_and_classify(request, ChatResponse::into_completion).await
    }
}
