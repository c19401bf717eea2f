use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::workout::{Exercise, IntervalSet, LogWorkoutRequest, Workout};

/// Listing cap shared with competitions; the dashboard never needs more.
pub const MAX_LISTED: i64 = 100;

#[derive(FromRow)]
struct WorkoutRow {
    id: Uuid,
    user_id: Uuid,
    workout_date: NaiveDate,
    session: Option<String>,
    workout_type: String,
    sets: Json<Vec<IntervalSet>>,
    exercises: Json<Vec<Exercise>>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<WorkoutRow> for Workout {
    type Error = sqlx::Error;

    fn try_from(row: WorkoutRow) -> Result<Self, Self::Error> {
        let workout_type = row
            .workout_type
            .parse()
            .map_err(|e: String| sqlx::Error::Decode(e.into()))?;
        Ok(Workout {
            id: row.id,
            user_id: row.user_id,
            date: row.workout_date,
            session: row.session,
            workout_type,
            sets: row.sets.0,
            exercises: row.exercises.0,
            notes: row.notes,
            created_at: row.created_at,
        })
    }
}

pub async fn insert_workout(
    pool: &PgPool,
    user_id: Uuid,
    request: LogWorkoutRequest,
) -> Result<Uuid, sqlx::Error> {
    let workout_id = Uuid::new_v4();
    let date = request.date;
    let session = request.session.clone();
    let workout_type = request.workout_type;
    let notes = request.notes.clone();
    let (sets, exercises) = request.shaped();

    sqlx::query(
        r#"
        INSERT INTO workouts
            (id, user_id, workout_date, session, workout_type, sets, exercises, notes, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(workout_id)
    .bind(user_id)
    .bind(date)
    .bind(session)
    .bind(workout_type.to_string())
    .bind(Json(sets))
    .bind(Json(exercises))
    .bind(notes)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(workout_id)
}

/// Newest-created-first, capped at the 100 most recent.
pub async fn list_recent(pool: &PgPool, user_id: Uuid) -> Result<Vec<Workout>, sqlx::Error> {
    let rows = sqlx::query_as::<_, WorkoutRow>(
        r#"
        SELECT id, user_id, workout_date, session, workout_type, sets, exercises,
               notes, created_at
        FROM workouts
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(MAX_LISTED)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Workout::try_from).collect()
}
