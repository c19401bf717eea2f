use once_cell::sync::Lazy;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::json;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use uuid::Uuid;

use athlete_tracker_backend::config::settings::{get_config, DatabaseSettings};
use athlete_tracker_backend::run;
use athlete_tracker_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    let connection_pool = configure_db(&configuration.database).await;
    let server = run(
        listener,
        connection_pool.clone(),
        configuration.jwt,
        configuration.application.allowed_origins,
    )
    .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);
    TestApp {
        address,
        db_pool: connection_pool,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect(&config.connection_string_without_db())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Migrate database
    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

/// Sign up a fresh user and return their bearer token plus email.
pub async fn create_user_and_token(app_address: &str) -> (String, String) {
    let client = Client::new();
    let username = format!("athlete{}", Uuid::new_v4().simple());
    let email = format!("{}@example.com", username);
    let password = "password123";

    let response = client
        .post(format!("{}/api/signup", app_address))
        .json(&json!({
            "username": username,
            "email": email,
            "password": password,
        }))
        .send()
        .await
        .expect("Failed to sign up test user.");
    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.expect("Signup body was not JSON.");
    let token = body["token"]
        .as_str()
        .expect("Signup response carried no token.")
        .to_string();

    (token, email)
}

/// A profile payload the setup form would submit.
pub fn sample_profile() -> serde_json::Value {
    json!({
        "fullName": "Test Athlete",
        "mainEvent": "100",
        "otherEvents": ["200", "", "200m"],
        "personalBestValue": "10.45",
        "heightCm": 180.0,
        "weightKg": 75.0,
        "trainingDaysPerWeek": 5
    })
}

/// A competition payload with all required fields present.
pub fn sample_competition(date: &str) -> serde_json::Value {
    json!({
        "raceTime": "00:10:50",
        "competitionName": "City Championships",
        "date": date,
        "location": "Helsinki",
        "distance": "100m",
        "roundType": "Heats",
        "wind": "+1.2",
        "position": "2",
        "lane": "4"
    })
}
