use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::db::competitions;
use crate::errors::ApiError;
use crate::models::competition::CompetitionRequest;

/// Same check on create and update: every missing required field is named.
fn validate(request: &CompetitionRequest) -> Result<(), ApiError> {
    let missing = request.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation {
            missing_fields: missing,
        })
    }
}

#[tracing::instrument(
    name = "Log a competition result",
    skip(pool, claims, competition_form),
    fields(username = %claims.username)
)]
pub async fn create_competition(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    competition_form: web::Json<CompetitionRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims.user_id().ok_or(ApiError::InvalidToken)?;
    validate(&competition_form)?;

    let competition = competitions::insert_competition(&pool, user_id, &competition_form).await?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Competition result saved successfully!",
        "competition": competition,
    })))
}

#[tracing::instrument(
    name = "List recent competitions",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn list_competitions(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims.user_id().ok_or(ApiError::InvalidToken)?;

    let competitions = competitions::list_recent(&pool, user_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "competitions": competitions,
    })))
}

#[tracing::instrument(
    name = "Get competition by id",
    skip(pool, claims),
    fields(username = %claims.username, competition_id = %path)
)]
pub async fn get_competition(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims.user_id().ok_or(ApiError::InvalidToken)?;

    match competitions::get_by_id(&pool, user_id, path.into_inner()).await? {
        Some(competition) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "competition": competition,
        }))),
        None => Err(ApiError::NotFound("Competition")),
    }
}

#[tracing::instrument(
    name = "Update competition",
    skip(pool, claims, competition_form),
    fields(username = %claims.username, competition_id = %path)
)]
pub async fn update_competition(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    competition_form: web::Json<CompetitionRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims.user_id().ok_or(ApiError::InvalidToken)?;
    validate(&competition_form)?;

    match competitions::update_competition(&pool, user_id, path.into_inner(), &competition_form)
        .await?
    {
        Some(competition) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Competition updated successfully!",
            "competition": competition,
        }))),
        None => Err(ApiError::NotFound("Competition")),
    }
}

#[tracing::instrument(
    name = "Delete competition",
    skip(pool, claims),
    fields(username = %claims.username, competition_id = %path)
)]
pub async fn delete_competition(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims.user_id().ok_or(ApiError::InvalidToken)?;

    if competitions::delete_competition(&pool, user_id, path.into_inner()).await? {
        Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Competition deleted successfully!",
        })))
    } else {
        Err(ApiError::NotFound("Competition"))
    }
}
