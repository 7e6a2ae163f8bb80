//! Serverless event front ends.
//!
//! Two bindings over the same adapter and router:
//!
//! - [`handle_event`]: one function multiplexing every route by path.
//! - [`handle_route_event`]: one function per route; the event carries
//!   only a verb and a body.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::adapter::{CanonicalRequest, RouteKind};
use crate::envelope::Envelope;
use crate::router::handle;
use crate::state::AppContext;

/// Inbound event as delivered by function-hosting platforms.
///
/// Either verb field and either path field may be present. The body may
/// be a JSON string, an already-decoded object, or absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerlessEvent {
    #[serde(default, rename = "httpMethod")]
    pub http_method: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, rename = "rawPath")]
    pub raw_path: Option<String>,
    #[serde(default)]
    pub body: Option<Value>,
}

impl ServerlessEvent {
    fn method(&self) -> Option<&str> {
        first_present(self.http_method.as_deref(), self.method.as_deref())
    }

    fn path(&self) -> Option<&str> {
        first_present(self.path.as_deref(), self.raw_path.as_deref())
    }

    fn raw_body(&self) -> String {
        match &self.body {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Normalize into a canonical request.
    pub fn into_canonical(self, dedicated: Option<RouteKind>) -> CanonicalRequest {
        CanonicalRequest::normalize(self.method(), self.path(), self.raw_body(), dedicated)
    }
}

/// Blank fields count as absent.
fn first_present<'a>(primary: Option<&'a str>, fallback: Option<&'a str>) -> Option<&'a str> {
    let present = |v: &&str| !v.trim().is_empty();
    primary.filter(present).or_else(|| fallback.filter(present))
}

/// Response shape expected by function-hosting platforms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON-encoded body.
    pub body: String,
}

impl From<Envelope> for EventResponse {
    fn from(envelope: Envelope) -> Self {
        let headers = envelope
            .headers()
            .into_iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();

        Self {
            status_code: envelope.status().as_u16(),
            headers,
            body: envelope.body_string(),
        }
    }
}

/// Multiplexed binding: the event path selects the route.
pub async fn handle_event(ctx: &AppContext, event: ServerlessEvent) -> EventResponse {
    handle(ctx, event.into_canonical(None)).await.into()
}

/// Per-route binding: `route` selects the route and the default verb.
pub async fn handle_route_event(
    ctx: &AppContext,
    route: RouteKind,
    event: ServerlessEvent,
) -> EventResponse {
    handle(ctx, event.into_canonical(Some(route))).await.into()
}
