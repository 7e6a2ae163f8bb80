//! Conversion orchestration.
//!
//! Decides between the demo placeholder and a real backend call, then
//! applies the fallback policy to the classified [`BackendOutcome`]:
//!
//! | outcome | result |
//! |---------|--------|
//! | `Success(text)` | success with `text` |
//! | `Unauthorized` | success with the placeholder |
//! | `NetworkFailure`, `MalformedResponse` | success with the placeholder |
//! | `Timeout` | error, retryable message |

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::ConfigSnapshot;
use crate::domain::{ConversionRequest, ConversionResult};
use crate::ports::{BackendCall, BackendOutcome, TranslationBackend};

/// Decoding temperature sent with every backend call.
pub const CONVERSION_TEMPERATURE: f32 = 0.2;

/// Fixed output returned in demo mode and on absorbed backend failures.
pub const DEMO_PLACEHOLDER: &str = r"import { test, expect } from '@playwright/test';

test('converted test', async ({ page }) => {
    // Navigate to the page
    await page.goto('https://example.com');

    // Fill in form fields
    await page.locator('#username').fill('user');
    await page.locator('#password').fill('pass');

    // Click submit button
    await page.locator('#submit').click();

    // Verify page title
    await expect(page).toHaveTitle('Dashboard');
});

// NOTE: This is a DEMO conversion.
// To get real AI-powered conversions, configure a valid API key in the service environment.";

/// Combine the instruction template and the source code.
///
/// The template always comes first, followed by the `INPUT:` marker and
/// the code, and the prompt ends with an `OUTPUT:` cue.
pub fn build_prompt(template: &str, source_code: &str) -> String {
    format!("{}\n\nINPUT:\n{}\n\nOUTPUT:", template.trim_end(), source_code)
}

/// Map a classified backend outcome to the caller-facing result.
///
/// A success carrying only whitespace is treated as malformed, so a
/// success result always has code.
pub fn apply_fallback(outcome: BackendOutcome) -> ConversionResult {
    match outcome {
        BackendOutcome::Success(text) if !text.trim().is_empty() => {
            ConversionResult::success(text)
        }
        BackendOutcome::Timeout => ConversionResult::timed_out(),
        BackendOutcome::Success(_)
        | BackendOutcome::Unauthorized
        | BackendOutcome::NetworkFailure(_)
        | BackendOutcome::MalformedResponse => ConversionResult::success(DEMO_PLACEHOLDER),
    }
}

/// Drives one conversion against the configured backend.
#[derive(Clone)]
pub struct ConversionOrchestrator {
    config: Arc<ConfigSnapshot>,
    backend: Arc<dyn TranslationBackend>,
}

impl ConversionOrchestrator {
    pub fn new(config: Arc<ConfigSnapshot>, backend: Arc<dyn TranslationBackend>) -> Self {
        Self { config, backend }
    }

    /// Model used for `request`: its override, or the configured default.
    pub fn effective_model<'a>(&'a self, request: &'a ConversionRequest) -> &'a str {
        request.model().unwrap_or(&self.config.default_model)
    }

    /// Convert one request. Never fails; failures are folded into the result.
    pub async fn convert(&self, request: &ConversionRequest) -> ConversionResult {
        if self.config.is_demo() {
            info!(
                target_flavor = %request.target_flavor(),
                "Demo mode active, returning placeholder conversion"
            );
            return ConversionResult::success(DEMO_PLACEHOLDER);
        }

        let model = self.effective_model(request).to_string();
        let call = BackendCall {
            model: model.clone(),
            prompt: build_prompt(&self.config.prompt_template, request.source_code()),
            temperature: CONVERSION_TEMPERATURE,
            timeout: self.config.timeout,
        };

        info!(
            model = %model,
            target_flavor = %request.target_flavor(),
            source_len = request.source_code().len(),
            "Sending conversion to backend"
        );

        let outcome = self.backend.complete(call).await;
        match &outcome {
            BackendOutcome::Success(text) => {
                info!(model = %model, output_len = text.len(), "Backend conversion succeeded");
            }
            BackendOutcome::Timeout => {
                warn!(
                    model = %model,
                    timeout = ?self.config.timeout,
                    "Backend timed out, surfacing retryable error"
                );
            }
            BackendOutcome::NetworkFailure(detail) => {
                warn!(model = %model, detail = %detail, "Backend unreachable, falling back to placeholder");
            }
            other => {
                warn!(model = %model, outcome = other.kind(), "Backend failed, falling back to placeholder");
            }
        }

        apply_fallback(outcome)
    }
}
