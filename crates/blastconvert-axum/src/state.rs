//! Shared application state type.
//!
//! Defines the `AppState` type used by every transport front end.

use std::sync::Arc;

use blastconvert_core::{ConfigSnapshot, ConversionOrchestrator, TranslationBackend};

/// Everything a request needs. Immutable once built.
pub struct AppContext {
    /// Process-wide configuration, resolved once at startup.
    pub config: Arc<ConfigSnapshot>,
    /// Orchestrator bound to `config` and the selected backend.
    pub orchestrator: ConversionOrchestrator,
}

impl AppContext {
    pub fn new(config: Arc<ConfigSnapshot>, backend: Arc<dyn TranslationBackend>) -> Self {
        let orchestrator = ConversionOrchestrator::new(Arc::clone(&config), backend);
        Self {
            config,
            orchestrator,
        }
    }
}

/// Application state shared across all handlers.
pub type AppState = Arc<AppContext>;
