use reqwest::Client;
use serde_json::json;
use sqlx::Row;

mod common;
use common::utils::spawn_app;

#[tokio::test]
async fn signup_stores_hash_and_returns_token() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/signup", &test_app.address))
        .json(&json!({
            "username": "sprinter",
            "email": "sprinter@example.com",
            "password": "password123",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.expect("Body was not JSON.");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));

    let saved = sqlx::query("SELECT username, email, password_hash FROM users WHERE email = $1")
        .bind("sprinter@example.com")
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Failed to fetch saved user.");

    assert_eq!(saved.get::<String, _>("username"), "sprinter");
    // Never the plaintext
    assert_ne!(saved.get::<String, _>("password_hash"), "password123");
}

#[tokio::test]
async fn second_signup_with_same_email_is_rejected() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let payload = json!({
        "username": "first",
        "email": "taken@example.com",
        "password": "password123",
    });
    let response = client
        .post(format!("{}/api/signup", &test_app.address))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);

    let response = client
        .post(format!("{}/api/signup", &test_app.address))
        .json(&json!({
            "username": "second",
            "email": "taken@example.com",
            "password": "differentpass",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.expect("Body was not JSON.");
    assert_eq!(body["message"], "Email already used");
}

#[tokio::test]
async fn login_with_valid_credentials_returns_token() {
    let test_app = spawn_app().await;
    let client = Client::new();

    client
        .post(format!("{}/api/signup", &test_app.address))
        .json(&json!({
            "username": "runner",
            "email": "runner@example.com",
            "password": "password123",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    let response = client
        .post(format!("{}/api/login", &test_app.address))
        .json(&json!({
            "email": "runner@example.com",
            "password": "password123",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Body was not JSON.");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn wrong_password_and_unknown_email_are_indistinguishable() {
    let test_app = spawn_app().await;
    let client = Client::new();

    client
        .post(format!("{}/api/signup", &test_app.address))
        .json(&json!({
            "username": "runner",
            "email": "runner@example.com",
            "password": "password123",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    let wrong_password = client
        .post(format!("{}/api/login", &test_app.address))
        .json(&json!({
            "email": "runner@example.com",
            "password": "wrongpass",
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    let unknown_email = client
        .post(format!("{}/api/login", &test_app.address))
        .json(&json!({
            "email": "nobody@example.com",
            "password": "password123",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_email.status().as_u16(), 401);

    let body_a: serde_json::Value = wrong_password.json().await.expect("Body was not JSON.");
    let body_b: serde_json::Value = unknown_email.json().await.expect("Body was not JSON.");
    assert_eq!(body_a, body_b);
    assert_eq!(body_a["message"], "Invalid credentials");
}

#[tokio::test]
async fn protected_routes_reject_missing_and_garbage_tokens() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let no_token = client
        .get(format!("{}/api/workouts", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(no_token.status().as_u16(), 401);

    let garbage = client
        .get(format!("{}/api/workouts", &test_app.address))
        .bearer_auth("not-a-jwt")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(garbage.status().as_u16(), 401);
}
