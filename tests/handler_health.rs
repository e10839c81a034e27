mod common;

use axum::http::StatusCode;
use common::{FakeReferenceData, MemoryCache, TestApp};
use serde_json::Value;

#[tokio::test]
async fn test_basic_check_available() {
    let server = TestApp::default().server();

    let response = server.get("/healthcheck").await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_health_alias() {
    let server = TestApp::default().server();

    server
        .get("/health")
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_basic_check_unavailable_when_cache_down() {
    let server = TestApp::default()
        .with_cache(MemoryCache::unreachable())
        .server();

    server
        .get("/healthcheck")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_detailed_check_disabled_is_forbidden() {
    let server = TestApp::default().server();

    server
        .get("/healthcheck")
        .add_query_param("level", "detailed")
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_detailed_check_available() {
    let server = TestApp::default().with_detailed_health_check().server();

    server
        .get("/healthcheck")
        .add_query_param("level", "detailed")
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_detailed_check_database_down_is_unavailable() {
    let data = FakeReferenceData {
        database_down: true,
        ..Default::default()
    };
    let server = TestApp::default()
        .with_reference_data(data)
        .with_detailed_health_check()
        .server();

    server
        .get("/healthcheck")
        .add_query_param("level", "detailed")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_detailed_check_degraded_is_internal_error() {
    let server = TestApp::default()
        .with_cache(MemoryCache::unreachable())
        .with_detailed_health_check()
        .server();

    let response = server
        .get("/healthcheck")
        .add_query_param("level", "detailed")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["message"], "Error retrieving health status");
}

#[tokio::test]
async fn test_invalid_level_is_bad_request() {
    let server = TestApp::default().server();

    let response = server
        .get("/healthcheck")
        .add_query_param("level", "deep")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["message"], "Invalid health check level");
}

#[tokio::test]
async fn test_uppercase_level_is_bad_request() {
    let server = TestApp::default().with_detailed_health_check().server();

    let response = server
        .get("/healthcheck")
        .add_query_param("level", "DETAILED")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["message"], "Invalid health check level");
}
