use chrono::Utc;
use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{create_user_and_token, spawn_app};

fn interval_workout(date: &str) -> serde_json::Value {
    json!({
        "date": date,
        "session": "Morning",
        "workoutType": "Sprint",
        "sets": [
            {
                "reps": [
                    { "distance": 100.0, "time": "00:12:50" },
                    { "distance": 150.0, "time": "00:18:20" }
                ],
                "repRest": "2 min walk",
                "setRest": "5 min"
            }
        ],
        "notes": "Blocks felt sharp"
    })
}

fn strength_workout(date: &str) -> serde_json::Value {
    json!({
        "date": date,
        "workoutType": "Strength",
        "exercises": [
            { "name": "Back Squat", "weight": 120.0, "reps": 5 },
            { "name": "Bench", "weight": 80.0, "reps": 8 }
        ],
        // A stray sets array must not survive for a strength session
        "sets": [
            { "reps": [ { "distance": 100.0, "time": "00:12:50" } ], "repRest": null, "setRest": null }
        ]
    })
}

#[tokio::test]
async fn logging_an_interval_workout_returns_its_id() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (token, _) = create_user_and_token(&test_app.address).await;
    let today = Utc::now().date_naive().to_string();

    let response = client
        .post(format!("{}/api/workouts", &test_app.address))
        .bearer_auth(&token)
        .json(&interval_workout(&today))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.expect("Body was not JSON.");
    assert_eq!(body["success"], true);
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn strength_workout_keeps_exercises_and_drops_sets() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (token, _) = create_user_and_token(&test_app.address).await;
    let today = Utc::now().date_naive().to_string();

    let response = client
        .post(format!("{}/api/workouts", &test_app.address))
        .bearer_auth(&token)
        .json(&strength_workout(&today))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = client
        .get(format!("{}/api/workouts", &test_app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Body was not JSON.");

    let workouts = body["workouts"].as_array().expect("No workouts array.");
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0]["workoutType"], "Strength");
    assert_eq!(workouts[0]["exercises"].as_array().unwrap().len(), 2);
    assert!(workouts[0]["sets"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn listing_is_newest_created_first() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (token, _) = create_user_and_token(&test_app.address).await;
    let today = Utc::now().date_naive().to_string();

    for notes in ["first", "second"] {
        let mut workout = interval_workout(&today);
        workout["notes"] = json!(notes);
        let response = client
            .post(format!("{}/api/workouts", &test_app.address))
            .bearer_auth(&token)
            .json(&workout)
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status().as_u16(), 201);
    }

    let body: serde_json::Value = client
        .get(format!("{}/api/workouts", &test_app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Body was not JSON.");

    let workouts = body["workouts"].as_array().expect("No workouts array.");
    assert_eq!(workouts.len(), 2);
    assert_eq!(workouts[0]["notes"], "second");
    assert_eq!(workouts[1]["notes"], "first");
}

#[tokio::test]
async fn users_only_see_their_own_workouts() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (token_a, _) = create_user_and_token(&test_app.address).await;
    let (token_b, _) = create_user_and_token(&test_app.address).await;
    let today = Utc::now().date_naive().to_string();

    client
        .post(format!("{}/api/workouts", &test_app.address))
        .bearer_auth(&token_a)
        .json(&interval_workout(&today))
        .send()
        .await
        .expect("Failed to execute request.");

    let body: serde_json::Value = client
        .get(format!("{}/api/workouts", &test_app.address))
        .bearer_auth(&token_b)
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Body was not JSON.");

    assert!(body["workouts"].as_array().unwrap().is_empty());
}
