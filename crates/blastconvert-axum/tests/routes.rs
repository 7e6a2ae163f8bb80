//! Integration tests for the axum front end.
//!
//! Requests go through the full router with `oneshot`; the backend is
//! either a mock or a fixed stand-in so no network is involved.

mod common;

use axum::body::Body;
use axum::http::{StatusCode, header};
use blastconvert_axum::create_router;
use blastconvert_core::config::keys;
use blastconvert_core::ports::MockTranslationBackend;
use blastconvert_core::{BackendOutcome, DEMO_PLACEHOLDER, EMPTY_SOURCE_MESSAGE, TIMEOUT_MESSAGE};
use serde_json::json;
use tower::ServiceExt;

use common::{
    FixedBackend, JAVA_SNIPPET, LIVE_KEY, PanickingBackend, body_bytes, body_json, config,
    context, live_config, request,
};

fn untouched_backend() -> MockTranslationBackend {
    let mut backend = MockTranslationBackend::new();
    backend.expect_complete().times(0);
    backend
}

fn convert_body(code: &str) -> String {
    json!({ "java_source_code": code }).to_string()
}

#[tokio::test]
async fn health_reports_version_and_demo_flag() {
    let app = create_router(context(config(&[]), untouched_backend()));

    let response = app.oneshot(request("GET", "/health", Body::empty())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["demo_mode"], true);
}

#[tokio::test]
async fn health_with_key_is_not_demo() {
    let app = create_router(context(live_config(), untouched_backend()));

    let response = app.oneshot(request("GET", "/health", Body::empty())).await.unwrap();
    assert_eq!(body_json(response).await["demo_mode"], false);
}

#[tokio::test]
async fn models_lists_catalog_with_default_included() {
    let cfg = config(&[(keys::MODELS, "a, b ,a"), (keys::MODEL, "c")]);
    let app = create_router(context(cfg, untouched_backend()));

    let response = app.oneshot(request("GET", "/models", Body::empty())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["default"], "c");
    let models: Vec<String> = serde_json::from_value(body["models"].clone()).unwrap();
    assert!(models.contains(&"c".to_string()));
    assert!(models.contains(&"a".to_string()));
    assert!(models.contains(&"b".to_string()));
    assert_eq!(models.len(), 3);
}

#[tokio::test]
async fn options_is_answered_with_allow() {
    let app = create_router(context(config(&[]), untouched_backend()));

    let response = app
        .oneshot(request("OPTIONS", "/convert", Body::empty()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::ALLOW).unwrap(), "POST, OPTIONS");
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
        "Content-Type"
    );
}

#[tokio::test]
async fn options_on_read_routes_advertises_get() {
    for path in ["/health", "/models", "/api/models/"] {
        let app = create_router(context(config(&[]), untouched_backend()));

        let response = app
            .oneshot(request("OPTIONS", path, Body::empty()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "GET, OPTIONS");
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "GET, OPTIONS"
        );
        assert_eq!(body_json(response).await, json!({"message": "OK"}));
    }
}

#[tokio::test]
async fn options_on_unknown_path_is_still_ok() {
    let app = create_router(context(config(&[]), untouched_backend()));

    let response = app
        .oneshot(request("OPTIONS", "/anything", Body::empty()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::ALLOW).unwrap(), "GET, POST, OPTIONS");
}

#[tokio::test]
async fn unknown_path_is_404() {
    let app = create_router(context(config(&[]), untouched_backend()));

    let response = app.oneshot(request("GET", "/nope", Body::empty())).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Not found", "path": "/nope"})
    );
}

#[tokio::test]
async fn wrong_verb_is_405() {
    let app = create_router(context(live_config(), untouched_backend()));

    let response = app
        .clone()
        .oneshot(request("GET", "/convert", Body::empty()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers().get(header::ALLOW).unwrap(), "POST, OPTIONS");

    let response = app
        .oneshot(request("POST", "/health", Body::empty()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn base_path_prefix_is_ignored() {
    let app = create_router(context(config(&[]), untouched_backend()));

    let response = app
        .oneshot(request("GET", "/api/health/", Body::empty()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_code_is_400_without_backend_call() {
    for code in ["", "   \n\t"] {
        let app = create_router(context(live_config(), untouched_backend()));
        let response = app
            .oneshot(request("POST", "/convert", convert_body(code)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"playwright_code": "", "status": "error", "error_message": EMPTY_SOURCE_MESSAGE})
        );
    }
}

#[tokio::test]
async fn missing_field_and_empty_body_are_400() {
    for body in ["", "{}"] {
        let app = create_router(context(live_config(), untouched_backend()));
        let response = app.oneshot(request("POST", "/convert", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn malformed_body_is_400() {
    let app = create_router(context(live_config(), untouched_backend()));

    let response = app
        .oneshot(request("POST", "/convert", "{\"java_source_code\": "))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["playwright_code"], "");
    assert!(
        body["error_message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body")
    );
}

#[tokio::test]
async fn oversized_body_is_a_json_envelope() {
    let app = create_router(context(live_config(), untouched_backend()));

    let code = "a".repeat(3 * 1024 * 1024);
    let response = app
        .oneshot(request("POST", "/api/convert", convert_body(&code)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );

    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["playwright_code"], "");
    assert!(body["error_message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn demo_mode_returns_identical_placeholder() {
    let app = create_router(context(config(&[]), untouched_backend()));

    let first = app
        .clone()
        .oneshot(request("POST", "/convert", convert_body("class A {}")))
        .await
        .unwrap();
    let second = app
        .oneshot(request("POST", "/convert", convert_body(JAVA_SNIPPET)))
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    let first = body_bytes(first).await;
    let second = body_bytes(second).await;
    assert_eq!(first, second);

    let body: serde_json::Value = serde_json::from_slice(&first).unwrap();
    assert_eq!(body["playwright_code"], DEMO_PLACEHOLDER);
    assert_eq!(body["status"], "success");
    assert!(body["error_message"].is_null());
}

#[tokio::test]
async fn backend_success_is_returned() {
    let mut backend = MockTranslationBackend::new();
    backend
        .expect_complete()
        .withf(|call| call.prompt.contains(JAVA_SNIPPET))
        .times(1)
        .returning(|_| BackendOutcome::Success("X".to_string()));
    let app = create_router(context(live_config(), backend));

    let response = app
        .oneshot(request("POST", "/convert", convert_body(JAVA_SNIPPET)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"playwright_code": "X", "status": "success", "error_message": null})
    );
}

#[tokio::test]
async fn model_override_reaches_backend() {
    let mut backend = MockTranslationBackend::new();
    backend
        .expect_complete()
        .withf(|call| call.model == "custom-model")
        .times(1)
        .returning(|_| BackendOutcome::Success("ok".to_string()));
    let app = create_router(context(live_config(), backend));

    let body = json!({"java_source_code": JAVA_SNIPPET, "model": "custom-model"}).to_string();
    let response = app.oneshot(request("POST", "/convert", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unauthorized_falls_back_to_placeholder() {
    let app = create_router(context(
        config(&[(keys::API_KEY, LIVE_KEY)]),
        FixedBackend(BackendOutcome::Unauthorized),
    ));

    let response = app
        .oneshot(request("POST", "/convert", convert_body(JAVA_SNIPPET)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["playwright_code"], DEMO_PLACEHOLDER);
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn timeout_is_504_with_message() {
    let app = create_router(context(live_config(), FixedBackend(BackendOutcome::Timeout)));

    let response = app
        .oneshot(request("POST", "/convert", convert_body(JAVA_SNIPPET)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(
        body_json(response).await,
        json!({"playwright_code": "", "status": "error", "error_message": TIMEOUT_MESSAGE})
    );
}

#[tokio::test]
async fn panic_below_boundary_is_500() {
    let app = create_router(context(live_config(), PanickingBackend));

    let response = app
        .oneshot(request("POST", "/convert", convert_body(JAVA_SNIPPET)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["error_message"], "backend exploded");
}
