//! Classification of raw backend interactions into [`BackendOutcome`].
//!
//! Both wire dialects share this path: send the request, map the status,
//! then pull the completion field out of the JSON body.

use blastconvert_core::BackendOutcome;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

/// Map a non-success status to its outcome. `None` means "read the body".
pub fn classify_status(status: StatusCode) -> Option<BackendOutcome> {
    if status == StatusCode::UNAUTHORIZED {
        Some(BackendOutcome::Unauthorized)
    } else if status.is_success() {
        None
    } else {
        Some(BackendOutcome::NetworkFailure(format!(
            "upstream returned {status}"
        )))
    }
}

/// Map a transport-level error to its outcome.
pub fn classify_transport_error(err: &reqwest::Error) -> BackendOutcome {
    if err.is_timeout() {
        BackendOutcome::Timeout
    } else {
        BackendOutcome::NetworkFailure(err.to_string())
    }
}

/// Map a completion field to its outcome. Blank completions count as malformed.
pub fn classify_completion(completion: Option<String>) -> BackendOutcome {
    match completion.map(|text| text.trim().to_string()) {
        Some(text) if !text.is_empty() => BackendOutcome::Success(text),
        _ => BackendOutcome::MalformedResponse,
    }
}

/// Send `request` and classify the interaction.
///
/// `extract` pulls the completion text out of the decoded body `T`.
pub(crate) async fn send_and_classify<T, F>(request: RequestBuilder, extract: F) -> BackendOutcome
where
    T: DeserializeOwned,
    F: FnOnce(T) -> Option<String>,
{
    let response = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            let outcome = classify_transport_error(&e);
            error!(error = %e, outcome = outcome.kind(), "Backend request failed");
            return outcome;
        }
    };

    let status = response.status();
    if let Some(outcome) = classify_status(status) {
        warn!(status = %status, outcome = outcome.kind(), "Backend returned error status");
        return outcome;
    }

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => {
            let outcome = classify_transport_error(&e);
            error!(error = %e, outcome = outcome.kind(), "Failed to read backend response");
            return outcome;
        }
    };

    match serde_json::from_slice::<T>(&body) {
        Ok(decoded) => {
            let outcome = classify_completion(extract(decoded));
            if outcome == BackendOutcome::MalformedResponse {
                warn!("Backend response has no completion text");
            } else {
                debug!(bytes = body.len(), "Backend response decoded");
            }
            outcome
        }
        Err(e) => {
            warn!(error = %e, "Backend response is not the expected JSON");
            BackendOutcome::MalformedResponse
        }
    }
}
