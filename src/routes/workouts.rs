use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::auth::jwt::Claims;
use crate::errors::ApiError;
use crate::handlers::workout_handler;
use crate::models::workout::LogWorkoutRequest;

#[post("")]
async fn log_workout(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    workout_form: web::Json<LogWorkoutRequest>,
) -> Result<HttpResponse, ApiError> {
    workout_handler::log_workout(pool, claims, workout_form).await
}

#[get("")]
async fn list_workouts(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    workout_handler::list_workouts(pool, claims).await
}
