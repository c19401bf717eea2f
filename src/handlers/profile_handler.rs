use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::auth::jwt::Claims;
use crate::db::profiles;
use crate::errors::ApiError;
use crate::models::profile::{
    compute_bmi, normalize_event, normalize_other_events, normalize_time_value,
    UpsertProfileRequest,
};

#[tracing::instrument(
    name = "Create or replace athlete profile",
    skip(pool, claims, profile_form),
    fields(username = %claims.username)
)]
pub async fn upsert_profile(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    profile_form: web::Json<UpsertProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims.user_id().ok_or(ApiError::InvalidToken)?;

    let invalid = profile_form.invalid_fields();
    if !invalid.is_empty() {
        return Err(ApiError::Validation {
            missing_fields: invalid,
        });
    }

    let main_event = normalize_event(&profile_form.main_event);
    let other_events = normalize_other_events(&profile_form.other_events);
    let personal_best_value = profile_form
        .personal_best_value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(normalize_time_value);
    // BMI is always derived here, never taken from the request
    let bmi = compute_bmi(profile_form.height_cm, profile_form.weight_kg);

    let profile = profiles::upsert_profile(
        &pool,
        user_id,
        profile_form.full_name.trim(),
        &main_event,
        &other_events,
        personal_best_value.as_deref(),
        profile_form.height_cm,
        profile_form.weight_kg,
        bmi,
        profile_form.training_days_per_week,
    )
    .await?;

    tracing::info!("Profile stored for user {}", user_id);
    Ok(HttpResponse::Created().json(profile))
}

#[tracing::instrument(
    name = "Get own athlete profile",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_my_profile(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims.user_id().ok_or(ApiError::InvalidToken)?;

    match profiles::get_profile(&pool, user_id).await? {
        Some(profile) => Ok(HttpResponse::Ok().json(profile)),
        None => Err(ApiError::NotFound("Profile")),
    }
}
