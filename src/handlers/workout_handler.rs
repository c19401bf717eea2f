use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::auth::jwt::Claims;
use crate::db::workouts;
use crate::errors::ApiError;
use crate::models::workout::LogWorkoutRequest;

#[tracing::instrument(
    name = "Log a workout",
    skip(pool, claims, workout_form),
    fields(username = %claims.username, workout_type = %workout_form.workout_type)
)]
pub async fn log_workout(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    workout_form: web::Json<LogWorkoutRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims.user_id().ok_or(ApiError::InvalidToken)?;

    let workout_id = workouts::insert_workout(&pool, user_id, workout_form.into_inner()).await?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Workout saved successfully",
        "id": workout_id,
    })))
}

#[tracing::instrument(
    name = "List recent workouts",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn list_workouts(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims.user_id().ok_or(ApiError::InvalidToken)?;

    let workouts = workouts::list_recent(&pool, user_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "workouts": workouts,
    })))
}
