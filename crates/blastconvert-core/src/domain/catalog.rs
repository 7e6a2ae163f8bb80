//! Model catalog exposed by `GET /models`.

use serde::Serialize;

/// Ordered list of model identifiers plus a designated default.
///
/// The catalog is never empty and `default` is always one of `models`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelCatalog {
    models: Vec<String>,
    default: String,
}

impl ModelCatalog {
    /// Build a catalog from configured entries.
    ///
    /// Blank entries and duplicates are dropped. A default that is not
    /// listed is inserted at the front.
    pub fn new<I, S>(models: I, default: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let default = default.into().trim().to_string();
        let mut list: Vec<String> = Vec::new();
        for model in models {
            let model = model.as_ref().trim();
            if !model.is_empty() && !list.iter().any(|m| m == model) {
                list.push(model.to_string());
            }
        }

        if !list.iter().any(|m| *m == default) {
            list.insert(0, default.clone());
        }

        Self {
            models: list,
            default,
        }
    }

    pub fn list(&self) -> &[String] {
        &self.models
    }

    pub fn default_model(&self) -> &str {
        &self.default
    }
}
