use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::workouts::MAX_LISTED;
use crate::models::competition::{
    Competition, CompetitionRequest, DEFAULT_COMPETITION_NAME, DEFAULT_DISTANCE,
    DEFAULT_ROUND_TYPE,
};

const COMPETITION_COLUMNS: &str = "id, user_id, race_time, competition_name, event_date, \
     location, distance, round_type, wind, position, lane, created_at, updated_at";

/// Field values with fallbacks applied. Callers run `missing_fields()`
/// first, so the required fields are present by the time this is built.
struct CompetitionValues {
    race_time: String,
    competition_name: String,
    event_date: NaiveDate,
    location: String,
    distance: String,
    round_type: String,
}

fn apply_defaults(request: &CompetitionRequest) -> CompetitionValues {
    CompetitionValues {
        race_time: request.race_time.clone().unwrap_or_default(),
        competition_name: request
            .competition_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COMPETITION_NAME.to_string()),
        event_date: request.date.unwrap_or_default(),
        location: request.location.clone().unwrap_or_default(),
        distance: request
            .distance
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DISTANCE.to_string()),
        round_type: request
            .round_type
            .clone()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ROUND_TYPE.to_string()),
    }
}

pub async fn insert_competition(
    pool: &PgPool,
    user_id: Uuid,
    request: &CompetitionRequest,
) -> Result<Competition, sqlx::Error> {
    let values = apply_defaults(request);
    let now = Utc::now();
    sqlx::query_as::<_, Competition>(&format!(
        r#"
        INSERT INTO competitions
            (id, user_id, race_time, competition_name, event_date, location,
             distance, round_type, wind, position, lane, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
        RETURNING {COMPETITION_COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(values.race_time)
    .bind(values.competition_name)
    .bind(values.event_date)
    .bind(values.location)
    .bind(values.distance)
    .bind(values.round_type)
    .bind(request.wind.clone())
    .bind(request.position.clone())
    .bind(request.lane.clone())
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Update matched on id AND owner together: a row owned by someone else is
/// indistinguishable from an absent one.
pub async fn update_competition(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    request: &CompetitionRequest,
) -> Result<Option<Competition>, sqlx::Error> {
    let values = apply_defaults(request);
    sqlx::query_as::<_, Competition>(&format!(
        r#"
        UPDATE competitions SET
            race_time = $3,
            competition_name = $4,
            event_date = $5,
            location = $6,
            distance = $7,
            round_type = $8,
            wind = $9,
            position = $10,
            lane = $11,
            updated_at = $12
        WHERE id = $1 AND user_id = $2
        RETURNING {COMPETITION_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(user_id)
    .bind(values.race_time)
    .bind(values.competition_name)
    .bind(values.event_date)
    .bind(values.location)
    .bind(values.distance)
    .bind(values.round_type)
    .bind(request.wind.clone())
    .bind(request.position.clone())
    .bind(request.lane.clone())
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

pub async fn delete_competition(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM competitions
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn get_by_id(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
) -> Result<Option<Competition>, sqlx::Error> {
    sqlx::query_as::<_, Competition>(&format!(
        r#"
        SELECT {COMPETITION_COLUMNS}
        FROM competitions
        WHERE id = $1 AND user_id = $2
        "#
    ))
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Newest-by-event-date-first, capped at the 100 most recent.
pub async fn list_recent(pool: &PgPool, user_id: Uuid) -> Result<Vec<Competition>, sqlx::Error> {
    sqlx::query_as::<_, Competition>(&format!(
        r#"
        SELECT {COMPETITION_COLUMNS}
        FROM competitions
        WHERE user_id = $1
        ORDER BY event_date DESC
        LIMIT $2
        "#
    ))
    .bind(user_id)
    .bind(MAX_LISTED)
    .fetch_all(pool)
    .await
}
