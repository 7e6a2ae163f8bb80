//! Axum router configuration.
//!
//! Routing is done by [`crate::router::dispatch`], not by axum's path
//! table: a single fallback handler feeds every request through the
//! adapter so suffix matching and the 404/405 envelopes behave the same
//! as on the serverless front ends.

use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{Method, Uri};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::adapter::{ALL_METHODS, CanonicalRequest, RouteKind};
use crate::envelope::Envelope;
use crate::router::handle;
use crate::state::{AppContext, AppState};

/// Create the application router.
pub fn create_router(ctx: AppContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .fallback(multiplexed)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn multiplexed(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Envelope {
    match body {
        Ok(body) => {
            let request = CanonicalRequest::from_http(method.as_str(), uri.path(), &body);
            handle(&state, request).await
        }
        // Oversized or unreadable bodies still leave as a JSON envelope.
        Err(rejection) => {
            let methods =
                RouteKind::resolve(uri.path()).map_or(ALL_METHODS, RouteKind::allowed_methods);
            warn!(
                method = %method,
                path = %uri.path(),
                status = rejection.status().as_u16(),
                "Request body rejected"
            );
            Envelope::body_rejected(rejection.status(), methods, &rejection.body_text())
        }
    }
}
