//! Convert command handler.
//!
//! Runs one conversion through the same orchestrator the HTTP service
//! uses, so demo mode and fallback behave identically.

use std::path::Path;

use anyhow::{Context, Result, bail};
use blastconvert_axum::AppContext;
use blastconvert_core::{ConversionRequest, ConversionResult};
use tracing::info;

/// Convert `file` and print or write the result.
///
/// Fails on unreadable input, empty source, or an error result.
pub async fn execute(
    ctx: &AppContext,
    file: &Path,
    model: Option<String>,
    output: Option<&Path>,
) -> Result<()> {
    let result = convert_file(ctx, file, model).await?;

    if let Some(message) = result.error_message() {
        bail!("{message}");
    }

    match output {
        Some(path) => {
            tokio::fs::write(path, result.converted_code())
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote converted code");
        }
        None => println!("{}", result.converted_code()),
    }
    Ok(())
}

async fn convert_file(
    ctx: &AppContext,
    file: &Path,
    model: Option<String>,
) -> Result<ConversionResult> {
    let source = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let request = ConversionRequest::new(source)?.with_model(model);
    Ok(ctx.orchestrator.convert(&request).await)
}
