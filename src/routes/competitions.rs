use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::errors::ApiError;
use crate::handlers::competition_handler;
use crate::models::competition::CompetitionRequest;

#[post("")]
async fn create_competition(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    competition_form: web::Json<CompetitionRequest>,
) -> Result<HttpResponse, ApiError> {
    competition_handler::create_competition(pool, claims, competition_form).await
}

#[get("")]
async fn list_competitions(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    competition_handler::list_competitions(pool, claims).await
}

#[get("/{id}")]
async fn get_competition(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    competition_handler::get_competition(pool, claims, path).await
}

#[put("/{id}")]
async fn update_competition(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    competition_form: web::Json<CompetitionRequest>,
) -> Result<HttpResponse, ApiError> {
    competition_handler::update_competition(pool, claims, path, competition_form).await
}

#[delete("/{id}")]
async fn delete_competition(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    competition_handler::delete_competition(pool, claims, path).await
}
