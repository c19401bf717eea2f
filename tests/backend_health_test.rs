use reqwest::Client;

mod common;
use common::utils::spawn_app;

#[tokio::test]
async fn health_check_works_without_auth() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/health", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Body was not JSON.");
    assert_eq!(body["status"], "OK");
}
