//! Process-wide configuration snapshot.
//!
//! The snapshot is resolved once at startup from the environment and is
//! immutable afterwards. Every request reads it; no request mutates it.
//! Resolution is deterministic given the same environment and prompt file.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::domain::ModelCatalog;

/// Environment keys read by [`ConfigSnapshot::from_env`].
pub mod keys {
    pub const BACKEND: &str = "BLASTCONVERT_BACKEND";
    pub const API_URL: &str = "BLASTCONVERT_API_URL";
    pub const API_URL_ALIAS: &str = "K2_API_URL";
    pub const API_KEY: &str = "BLASTCONVERT_API_KEY";
    pub const API_KEY_ALIAS: &str = "K2_API_KEY";
    pub const MODEL: &str = "BLASTCONVERT_MODEL";
    pub const MODELS: &str = "BLASTCONVERT_MODELS";
    pub const DEMO_MODE: &str = "BLASTCONVERT_DEMO_MODE";
    pub const PROMPT_FILE: &str = "BLASTCONVERT_PROMPT_FILE";
    pub const TIMEOUT_MS: &str = "BLASTCONVERT_TIMEOUT_MS";
}

/// Value shipped in `.env` templates. Treated exactly like a missing key.
pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

/// Instruction used when no prompt template file exists.
pub const DEFAULT_PROMPT_TEMPLATE: &str =
    "You are a code converter. Convert Java Selenium to Playwright TypeScript.";

pub const DEFAULT_PROMPT_FILE: &str = "architecture/conversion_prompt.md";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Wire dialect spoken by the configured backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// OpenAI-compatible `chat/completions` endpoint.
    #[default]
    OpenAi,
    /// Ollama `api/generate` endpoint.
    Ollama,
}

impl BackendKind {
    const fn default_url(self) -> &'static str {
        match self {
            Self::OpenAi => "https://api.k2.ai/v1/chat/completions",
            Self::Ollama => "http://localhost:11434/api/generate",
        }
    }

    const fn default_model(self) -> &'static str {
        match self {
            Self::OpenAi => "moonshot-v1-8k",
            Self::Ollama => "llama3",
        }
    }

    const fn default_catalog(self) -> &'static [&'static str] {
        match self {
            Self::OpenAi => &["moonshot-v1-8k", "moonshot-v1-32k", "moonshot-v1-128k"],
            Self::Ollama => &["llama3", "mistral", "codellama"],
        }
    }
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" | "openai-compatible" => Ok(Self::OpenAi),
            "ollama" => Ok(Self::Ollama),
            other => Err(ConfigError::invalid(
                keys::BACKEND,
                other,
                "expected `openai` or `ollama`",
            )),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenAi => f.write_str("openai"),
            Self::Ollama => f.write_str("ollama"),
        }
    }
}

/// Errors raised while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Failed to read prompt template {path}: {source}")]
    PromptTemplate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, reason: &'static str) -> Self {
        Self::InvalidValue {
            key,
            value: value.to_string(),
            reason,
        }
    }
}

/// Immutable configuration shared by every request.
#[derive(Clone, PartialEq, Eq)]
pub struct ConfigSnapshot {
    pub backend: BackendKind,
    pub backend_url: String,
    /// `None` when unset or blank.
    pub api_key: Option<String>,
    pub default_model: String,
    pub demo_mode: bool,
    pub prompt_template: String,
    pub timeout: Duration,
    pub catalog: ModelCatalog,
    pub version: String,
}

impl ConfigSnapshot {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend = match get(keys::BACKEND) {
            Some(raw) => raw.parse()?,
            None => BackendKind::default(),
        };

        let backend_url = get(keys::API_URL)
            .or_else(|| get(keys::API_URL_ALIAS))
            .map_or_else(|| backend.default_url().to_string(), |v| v.trim().to_string());

        let api_key = get(keys::API_KEY)
            .or_else(|| get(keys::API_KEY_ALIAS))
            .map(|v| v.trim().to_string());

        let default_model = get(keys::MODEL)
            .map_or_else(|| backend.default_model().to_string(), |v| v.trim().to_string());

        let catalog = match get(keys::MODELS) {
            Some(raw) => ModelCatalog::new(raw.split(','), default_model.clone()),
            None => ModelCatalog::new(backend.default_catalog().iter(), default_model.clone()),
        };

        let demo_mode = match get(keys::DEMO_MODE) {
            Some(raw) => parse_bool(keys::DEMO_MODE, &raw)?,
            None => false,
        };

        let timeout_ms = match get(keys::TIMEOUT_MS) {
            Some(raw) => parse_timeout_ms(&raw)?,
            None => DEFAULT_TIMEOUT_MS,
        };

        let prompt_path =
            get(keys::PROMPT_FILE).map_or_else(|| PathBuf::from(DEFAULT_PROMPT_FILE), PathBuf::from);
        let prompt_template = load_prompt_template(&prompt_path)?;

        let snapshot = Self {
            backend,
            backend_url,
            api_key,
            default_model,
            demo_mode,
            prompt_template,
            timeout: Duration::from_millis(timeout_ms),
            catalog,
            version: env!("CARGO_PKG_VERSION").to_string(),
        };

        tracing::debug!(
            backend = %snapshot.backend,
            backend_url = %snapshot.backend_url,
            default_model = %snapshot.default_model,
            demo = snapshot.is_demo(),
            timeout_ms,
            "Resolved configuration"
        );

        Ok(snapshot)
    }

    /// Whether requests are answered with the placeholder without calling
    /// the backend. A missing or placeholder key counts as demo mode.
    pub fn is_demo(&self) -> bool {
        self.demo_mode || !self.has_usable_key()
    }

    fn has_usable_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY)
    }
}

impl fmt::Debug for ConfigSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigSnapshot")
            .field("backend", &self.backend)
            .field("backend_url", &self.backend_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("default_model", &self.default_model)
            .field("demo_mode", &self.demo_mode)
            .field("prompt_template_len", &self.prompt_template.len())
            .field("timeout", &self.timeout)
            .field("catalog", &self.catalog)
            .field("version", &self.version)
            .finish()
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(key, raw, "expected a boolean")),
    }
}

fn parse_timeout_ms(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::invalid(
            keys::TIMEOUT_MS,
            raw,
            "timeout must be greater than zero",
        )),
        Ok(ms) => Ok(ms),
        Err(_) => Err(ConfigError::invalid(
            keys::TIMEOUT_MS,
            raw,
            "expected milliseconds as an integer",
        )),
    }
}

fn load_prompt_template(path: &Path) -> Result<String, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(text) if !text.trim().is_empty() => Ok(text),
        Ok(_) => {
            tracing::warn!(path = %path.display(), "Prompt template is empty, using built-in instruction");
            Ok(DEFAULT_PROMPT_TEMPLATE.to_string())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No prompt template file, using built-in instruction");
            Ok(DEFAULT_PROMPT_TEMPLATE.to_string())
        }
        Err(source) => Err(ConfigError::PromptTemplate {
            path: path.to_path_buf(),
            source,
        }),
    }
}
