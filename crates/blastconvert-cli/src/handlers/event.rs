//! Event command handler.
//!
//! Feeds one serverless event through the same adapter and router the
//! function-hosting platforms use and prints the platform response.

use std::path::Path;

use anyhow::{Context, Result};
use blastconvert_axum::{
    AppContext, EventResponse, RouteKind, ServerlessEvent, handle_event, handle_route_event,
};
use tokio::io::AsyncReadExt;

/// Answer one event read from `input`, or stdin when absent.
pub async fn execute(
    ctx: &AppContext,
    route: Option<RouteKind>,
    input: Option<&Path>,
) -> Result<()> {
    let raw = match input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("Failed to read event from stdin")?;
            buf
        }
    };

    let response = respond(ctx, route, &raw).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

async fn respond(ctx: &AppContext, route: Option<RouteKind>, raw: &str) -> Result<EventResponse> {
    let event: ServerlessEvent = if raw.trim().is_empty() {
        ServerlessEvent::default()
    } else {
        serde_json::from_str(raw).context("Event is not valid JSON")?
    };

    Ok(match route {
        Some(route) => handle_route_event(ctx, route, event).await,
        None => handle_event(ctx, event).await,
    })
}
