//! Axum server bootstrap - the composition root.
//!
//! The only place where the configured backend is instantiated and bound
//! to the orchestrator for the HTTP front end.

use std::sync::Arc;

use anyhow::Result;
use blastconvert_backend::build_backend;
use blastconvert_core::ConfigSnapshot;
use tokio::net::TcpListener;
use tracing::info;

use crate::state::AppContext;

/// Listen address for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `0.0.0.0:8000`.
    pub fn with_defaults() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Build the application context from a resolved configuration.
pub fn bootstrap(config: ConfigSnapshot) -> Result<AppContext> {
    info!(
        backend = %config.backend,
        default_model = %config.default_model,
        demo_mode = config.is_demo(),
        timeout = ?config.timeout,
        "Bootstrapping blastconvert"
    );

    let backend = build_backend(&config)?;
    Ok(AppContext::new(Arc::new(config), backend))
}

/// Bind and serve until Ctrl-C.
pub async fn start_server(server: ServerConfig, config: ConfigSnapshot) -> Result<()> {
    let ctx = bootstrap(config)?;
    let app = crate::routes::create_router(ctx);

    let addr = server.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("blastconvert listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("blastconvert stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listen_address() {
        assert_eq!(ServerConfig::default().addr(), "0.0.0.0:8000");
    }
}
