//! Trace persistence tests.
//!
//! Trace persistence is best-effort and detached: a failing sink must never
//! change the client-visible response, and a healthy sink receives the
//! finished trace after the response has been produced.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tokio::sync::mpsc;
use tower::ServiceExt;

use user_auth_api::api::create_router;
use user_auth_api::errors::{AppError, AppResult};
use user_auth_api::infra::{JwtTokenService, KeyedHasher, MemoryLogoutRegistry, MemoryUserStore};
use user_auth_api::services::TraceSink;
use user_auth_api::types::{ApplicationStatus, UseCaseTrace};
use user_auth_api::{AppState, Config};

/// Sink that always fails persistence
struct FailingTraceSink;

#[async_trait]
impl TraceSink for FailingTraceSink {
    async fn register(&self, _trace: UseCaseTrace) -> AppResult<()> {
        Err(AppError::internal("trace store unavailable"))
    }
}

/// Sink that forwards every trace to the test
struct RecordingTraceSink {
    tx: mpsc::UnboundedSender<UseCaseTrace>,
}

#[async_trait]
impl TraceSink for RecordingTraceSink {
    async fn register(&self, trace: UseCaseTrace) -> AppResult<()> {
        self.tx.send(trace).ok();
        Ok(())
    }
}

fn test_config() -> Config {
    Config::new(
        "test-secret-key-minimum-32-chars!!!!".to_string(),
        3600,
        "hello-alien".to_string(),
        1000,
        "127.0.0.1".to_string(),
        0,
    )
}

fn app_with_sink(sink: Arc<dyn TraceSink>) -> Router {
    let config = test_config();
    let state = AppState::new(
        Arc::new(MemoryUserStore::new()),
        Arc::new(MemoryLogoutRegistry::new()),
        Arc::new(KeyedHasher),
        Arc::new(JwtTokenService::new(&config)),
        sink,
        config,
    );
    create_router(state)
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn sign_up_body() -> Value {
    json!({
        "firstName": "Nikola",
        "lastName": "Tesla",
        "email": "nikola@tesla.com",
        "gender": "MALE",
        "passwordB64": BASE64.encode("SecurePass123"),
    })
}

fn login_body() -> Value {
    json!({
        "email": "nikola@tesla.com",
        "passwordB64": BASE64.encode("SecurePass123"),
    })
}

#[tokio::test]
async fn failing_trace_persistence_leaves_the_response_untouched() {
    let app = app_with_sink(Arc::new(FailingTraceSink));

    let (status, _) = post_json(&app, "/v1/users/sign-up", sign_up_body()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_json(&app, "/v1/auth/login", login_body()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert!(body["data"]["token"].as_str().is_some());
}

#[tokio::test]
async fn the_sink_receives_a_finished_trace() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let app = app_with_sink(Arc::new(RecordingTraceSink { tx }));

    let (status, _) = post_json(&app, "/v1/users/sign-up", sign_up_body()).await;
    assert_eq!(status, StatusCode::OK);

    let trace = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("trace was not persisted")
        .expect("sink channel closed");

    assert_eq!(trace.context(), "RegisterUserUseCase");
    assert!(trace.is_finished());
    assert_eq!(trace.outcome(), Some(ApplicationStatus::Success));
    assert!(trace.finished_at().unwrap() >= trace.started_at());
}
