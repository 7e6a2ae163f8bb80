//! Serve command handler.

use anyhow::Result;
use blastconvert_axum::{ServerConfig, start_server};
use blastconvert_core::ConfigSnapshot;

/// Run the HTTP service until interrupted.
pub async fn execute(config: ConfigSnapshot, host: String, port: u16) -> Result<()> {
    start_server(ServerConfig { host, port }, config).await
}
