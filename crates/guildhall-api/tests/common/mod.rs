//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use guildhall_core::rng::DeterministicRng;
use guildhall_store::InMemoryRosterRepository;
use guildhall_test_support::SequenceRng;
use http_body_util::BodyExt;
use tower::ServiceExt;

use guildhall_api::state::AppState;

/// Build state over an empty roster whose character ids come from `ids`.
pub fn test_state(ids: Vec<u32>) -> AppState {
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(SequenceRng::new(ids)));
    AppState::new(rng, Arc::new(InMemoryRosterRepository::new()))
}

/// Build the full app router, as `main.rs` does, over the given state.
pub fn build_test_app(state: AppState) -> Router {
    guildhall_api::app(state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response as JSON.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = get_raw(app, uri).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}

/// Send a GET request and return status, headers and raw body.
pub async fn get_raw(app: Router, uri: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, headers, body_bytes.to_vec())
}

/// The guild used in most scenarios.
pub fn fellowship_body() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": "Fellowship",
        "realm": "Eriador",
        "created": "2024-01-01T00:00:00"
    })
}
