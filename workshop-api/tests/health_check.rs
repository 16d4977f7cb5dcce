mod common;

use common::TestApp;
use workshop_api::services::providers::mock::MockTextProvider;

#[tokio::test]
async fn health_check_returns_healthy_with_timestamp() {
    let app = TestApp::spawn(MockTextProvider::replying("unused")).await;

    let response = app
        .client
        .get(format!("{}/api/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["message"], "Backend is running successfully!");
    let timestamp = body["timestamp"].as_str().expect("timestamp is a string");
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn health_check_ignores_request_body() {
    let app = TestApp::spawn(MockTextProvider::replying("unused")).await;

    let response = app
        .client
        .get(format!("{}/api/health", app.address))
        .header("content-type", "application/json")
        .body(r#"{"status":"broken","garbage":[1,2,3]}"#)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn health_check_works_without_api_key() {
    let app = TestApp::spawn_without_api_key(MockTextProvider::replying("unused")).await;

    let response = app
        .client
        .get(format!("{}/api/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert_eq!(app.provider.calls(), 0);
}
