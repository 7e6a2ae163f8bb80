//! Response envelopes.
//!
//! Every outcome leaves the service through an [`Envelope`]: a status
//! code, a JSON body and a fixed header set (JSON content type plus a
//! permissive cross-origin policy). Conversion-shaped bodies always carry
//! `playwright_code`, `status` and `error_message`; routing errors carry
//! `error`.

use axum::http::header::{self, HeaderName, HeaderValue};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use blastconvert_core::{ConversionResult, ConversionStatus};
use serde::Serialize;
use serde_json::{Value, json};

use crate::adapter::ALL_METHODS;

/// Body of every `/convert` response.
#[derive(Debug, Serialize)]
pub struct ConvertResponse<'a> {
    pub playwright_code: &'a str,
    pub status: ConversionStatus,
    pub error_message: Option<&'a str>,
}

impl<'a> From<&'a ConversionResult> for ConvertResponse<'a> {
    fn from(result: &'a ConversionResult) -> Self {
        Self {
            playwright_code: result.converted_code(),
            status: result.status(),
            error_message: result.error_message(),
        }
    }
}

/// A rendered outcome, independent of the transport that delivers it.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    status: StatusCode,
    methods: &'static str,
    advertise_allow: bool,
    body: Value,
}

impl Envelope {
    /// A JSON body with the CORS method list of the route that produced it.
    pub const fn json(status: StatusCode, methods: &'static str, body: Value) -> Self {
        Self {
            status,
            methods,
            advertise_allow: false,
            body,
        }
    }

    /// CORS preflight acknowledgement.
    pub fn preflight(methods: &'static str) -> Self {
        Self {
            advertise_allow: true,
            ..Self::json(StatusCode::OK, methods, json!({"message": "OK"}))
        }
    }

    /// A conversion outcome with the given status.
    pub fn conversion(
        status: StatusCode,
        methods: &'static str,
        result: &ConversionResult,
    ) -> serde_json::Result<Self> {
        let body = serde_json::to_value(ConvertResponse::from(result))?;
        Ok(Self::json(status, methods, body))
    }

    /// 400 for input the caller got wrong. The backend is never involved.
    pub fn validation_error(methods: &'static str, message: &str) -> Self {
        Self::json(StatusCode::BAD_REQUEST, methods, failure_body(message))
    }

    /// Body the transport refused to buffer (too large, unreadable).
    pub fn body_rejected(status: StatusCode, methods: &'static str, message: &str) -> Self {
        Self::json(status, methods, failure_body(message))
    }

    /// 500 for anything unexpected, with the underlying message surfaced.
    pub fn internal_error(message: &str) -> Self {
        Self::json(
            StatusCode::INTERNAL_SERVER_ERROR,
            ALL_METHODS,
            failure_body(message),
        )
    }

    pub fn not_found(path: &str) -> Self {
        Self::json(
            StatusCode::NOT_FOUND,
            ALL_METHODS,
            json!({"error": "Not found", "path": path}),
        )
    }

    pub fn method_not_allowed(methods: &'static str) -> Self {
        Self {
            advertise_allow: true,
            ..Self::json(
                StatusCode::METHOD_NOT_ALLOWED,
                methods,
                json!({"error": "Method not allowed"}),
            )
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub const fn body(&self) -> &Value {
        &self.body
    }

    /// Serialized body.
    pub fn body_string(&self) -> String {
        self.body.to_string()
    }

    /// Headers attached to every response, plus `Allow` where relevant.
    pub fn headers(&self) -> Vec<(HeaderName, HeaderValue)> {
        let methods = HeaderValue::from_static(self.methods);
        let mut headers = vec![
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ),
            (header::ACCESS_CONTROL_ALLOW_METHODS, methods.clone()),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            ),
        ];
        if self.advertise_allow {
            headers.push((header::ALLOW, methods));
        }
        headers
    }
}

fn failure_body(message: &str) -> Value {
    json!({
        "playwright_code": "",
        "status": ConversionStatus::Error,
        "error_message": message,
    })
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let headers = self.headers();
        let mut response = (self.status, self.body_string()).into_response();
        for (name, value) in headers {
            response.headers_mut().insert(name, value);
        }
        response
    }
}
