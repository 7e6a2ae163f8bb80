//! Shared fixtures for the HTTP surface tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use blastconvert_axum::AppContext;
use blastconvert_core::config::keys;
use blastconvert_core::{BackendCall, BackendOutcome, ConfigSnapshot, TranslationBackend};
use http_body_util::BodyExt;
use serde_json::Value;

pub const LIVE_KEY: &str = "sk-live-test";
pub const JAVA_SNIPPET: &str = "WebDriver driver = new ChromeDriver();";

/// Resolve a configuration from explicit pairs. The prompt file never exists.
pub fn config(pairs: &[(&str, &str)]) -> ConfigSnapshot {
    let mut vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    vars.entry(keys::PROMPT_FILE.to_string())
        .or_insert_with(|| "/nonexistent/blastconvert/prompt.md".to_string());
    ConfigSnapshot::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

/// Configuration with a usable API key, so the backend is consulted.
pub fn live_config() -> ConfigSnapshot {
    config(&[(keys::API_KEY, LIVE_KEY)])
}

pub fn context(config: ConfigSnapshot, backend: impl TranslationBackend + 'static) -> AppContext {
    AppContext::new(Arc::new(config), Arc::new(backend))
}

/// Backend that panics on every call.
pub struct PanickingBackend;

#[async_trait]
impl TranslationBackend for PanickingBackend {
    async fn complete(&self, _call: BackendCall) -> BackendOutcome {
        panic!("backend exploded");
    }
}

/// Backend that always answers with a fixed outcome.
pub struct FixedBackend(pub BackendOutcome);

#[async_trait]
impl TranslationBackend for FixedBackend {
    async fn complete(&self, _call: BackendCall) -> BackendOutcome {
        self.0.clone()
    }
}

pub fn request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
