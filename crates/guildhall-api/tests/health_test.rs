//! Integration tests for the health endpoint.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_returns_200_with_status_ok() {
    let app = common::build_test_app(common::test_state(vec![]));

    let (status, json) = common::get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = common::build_test_app(common::test_state(vec![]));

    let (status, _, _) = common::get_raw(app, "/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
