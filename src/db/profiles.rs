use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::profile::AthleteProfile;

const PROFILE_COLUMNS: &str = "id, user_id, full_name, main_event, other_events, \
     personal_best_value, height_cm, weight_kg, bmi, training_days_per_week, \
     created_at, updated_at";

/// One live profile per user: a second write for the same user_id lands on
/// the unique key and turns into an update of the existing row. The setup
/// flow relies on this to overwrite in place.
#[allow(clippy::too_many_arguments)]
pub async fn upsert_profile(
    pool: &PgPool,
    user_id: Uuid,
    full_name: &str,
    main_event: &str,
    other_events: &[String],
    personal_best_value: Option<&str>,
    height_cm: f64,
    weight_kg: f64,
    bmi: f64,
    training_days_per_week: i32,
) -> Result<AthleteProfile, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, AthleteProfile>(&format!(
        r#"
        INSERT INTO athlete_profiles
            (id, user_id, full_name, main_event, other_events, personal_best_value,
             height_cm, weight_kg, bmi, training_days_per_week, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
        ON CONFLICT (user_id) DO UPDATE SET
            full_name = EXCLUDED.full_name,
            main_event = EXCLUDED.main_event,
            other_events = EXCLUDED.other_events,
            personal_best_value = EXCLUDED.personal_best_value,
            height_cm = EXCLUDED.height_cm,
            weight_kg = EXCLUDED.weight_kg,
            bmi = EXCLUDED.bmi,
            training_days_per_week = EXCLUDED.training_days_per_week,
            updated_at = EXCLUDED.updated_at
        RETURNING {PROFILE_COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(full_name)
    .bind(main_event)
    .bind(other_events)
    .bind(personal_best_value)
    .bind(height_cm)
    .bind(weight_kg)
    .bind(bmi)
    .bind(training_days_per_week)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_profile(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<AthleteProfile>, sqlx::Error> {
    sqlx::query_as::<_, AthleteProfile>(&format!(
        r#"
        SELECT {PROFILE_COLUMNS}
        FROM athlete_profiles
        WHERE user_id = $1
        "#
    ))
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
