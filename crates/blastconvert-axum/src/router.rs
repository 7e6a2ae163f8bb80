//! Dispatch of canonical requests.
//!
//! [`handle`] is the single failure boundary: errors and panics raised
//! anywhere below it become a 500 envelope carrying the message.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use anyhow::Result;
use axum::http::StatusCode;
use blastconvert_core::{ConversionRequest, ValidationError};
use futures_util::FutureExt;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, info};

use crate::adapter::{ALL_METHODS, CanonicalRequest, RouteKind};
use crate::envelope::Envelope;
use crate::state::AppContext;

/// JSON body accepted by `POST /convert`.
#[derive(Debug, Default, Deserialize)]
struct ConvertBody {
    java_source_code: Option<String>,
    target_flavor: Option<String>,
    model: Option<String>,
}

/// Handle one canonical request. Never fails.
pub async fn handle(ctx: &AppContext, request: CanonicalRequest) -> Envelope {
    let method = request.method.clone();
    let path = request.path.clone();

    let envelope = match AssertUnwindSafe(dispatch(ctx, request))
        .catch_unwind()
        .await
    {
        Ok(Ok(envelope)) => envelope,
        Ok(Err(e)) => {
            error!(method = %method, path = %path, error = %e, "Request failed");
            Envelope::internal_error(&e.to_string())
        }
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            error!(method = %method, path = %path, panic = %message, "Request handler panicked");
            Envelope::internal_error(&message)
        }
    };

    info!(
        method = %method,
        path = %path,
        status = envelope.status().as_u16(),
        "Handled request"
    );
    envelope
}

/// Route a canonical request to its handler.
pub async fn dispatch(ctx: &AppContext, request: CanonicalRequest) -> Result<Envelope> {
    let Some(route) = RouteKind::resolve(&request.path) else {
        if request.method == "OPTIONS" {
            return Ok(Envelope::preflight(ALL_METHODS));
        }
        debug!(path = %request.path, "No route matched");
        return Ok(Envelope::not_found(&request.path));
    };

    let methods = route.allowed_methods();
    match (route, request.method.as_str()) {
        (_, "OPTIONS") => Ok(Envelope::preflight(methods)),
        (RouteKind::Health, "GET") => Ok(health(ctx)),
        (RouteKind::Models, "GET") => models(ctx),
        (RouteKind::Convert, "POST") => convert(ctx, &request.raw_body).await,
        _ => Ok(Envelope::method_not_allowed(methods)),
    }
}

fn health(ctx: &AppContext) -> Envelope {
    Envelope::json(
        StatusCode::OK,
        RouteKind::Health.allowed_methods(),
        json!({
            "status": "healthy",
            "version": ctx.config.version,
            "demo_mode": ctx.config.is_demo(),
        }),
    )
}

fn models(ctx: &AppContext) -> Result<Envelope> {
    let body = serde_json::to_value(&ctx.config.catalog)?;
    Ok(Envelope::json(
        StatusCode::OK,
        RouteKind::Models.allowed_methods(),
        body,
    ))
}

async fn convert(ctx: &AppContext, raw_body: &str) -> Result<Envelope> {
    let methods = RouteKind::Convert.allowed_methods();

    let request = match parse_convert_body(raw_body) {
        Ok(request) => request,
        Err(e) => {
            info!(error = %e, "Rejected conversion request");
            return Ok(Envelope::validation_error(methods, &e.to_string()));
        }
    };

    let result = ctx.orchestrator.convert(&request).await;
    let status = if result.is_success() {
        StatusCode::OK
    } else {
        StatusCode::GATEWAY_TIMEOUT
    };

    Ok(Envelope::conversion(status, methods, &result)?)
}

/// Decode and validate a `/convert` body. A blank body counts as `{}`.
fn parse_convert_body(raw_body: &str) -> Result<ConversionRequest, ValidationError> {
    let body: ConvertBody = if raw_body.trim().is_empty() {
        ConvertBody::default()
    } else {
        serde_json::from_str(raw_body).map_err(|e| ValidationError::MalformedBody(e.to_string()))?
    };

    Ok(ConversionRequest::new(body.java_source_code.unwrap_or_default())?
        .with_target_flavor(body.target_flavor)
        .with_model(body.model))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Internal error".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_body_is_missing_code() {
        assert_eq!(parse_convert_body(""), Err(ValidationError::EmptySource));
        assert_eq!(parse_convert_body("{}"), Err(ValidationError::EmptySource));
        assert_eq!(
            parse_convert_body(r#"{"java_source_code": "   "}"#),
            Err(ValidationError::EmptySource)
        );
        assert_eq!(
            parse_convert_body(r#"{"java_source_code": null}"#),
            Err(ValidationError::EmptySource)
        );
    }

    #[test]
    fn malformed_body_is_a_validation_error() {
        assert!(matches!(
            parse_convert_body("{not json"),
            Err(ValidationError::MalformedBody(_))
        ));
        assert!(matches!(
            parse_convert_body(r#"{"java_source_code": 42}"#),
            Err(ValidationError::MalformedBody(_))
        ));
        assert!(matches!(
            parse_convert_body("[]"),
            Err(ValidationError::MalformedBody(_))
        ));
    }

    #[test]
    fn optional_fields_are_carried() {
        let request = parse_convert_body(
            r#"{"java_source_code": "class A {}", "target_flavor": "javascript", "model": "m"}"#,
        )
        .unwrap();
        assert_eq!(request.source_code(), "class A {}");
        assert_eq!(request.target_flavor(), "javascript");
        assert_eq!(request.model(), Some("m"));
    }

    #[test]
    fn panic_payloads_are_readable() {
        let boxed: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(boxed.as_ref()), "static message");
        let boxed: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(panic_message(boxed.as_ref()), "owned message");
        let boxed: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(boxed.as_ref()), "Internal error");
    }
}
