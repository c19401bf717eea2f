use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::auth::jwt::Claims;
use crate::errors::ApiError;
use crate::handlers::profile_handler;
use crate::models::profile::UpsertProfileRequest;

#[post("")]
async fn create_profile(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    profile_form: web::Json<UpsertProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    profile_handler::upsert_profile(pool, claims, profile_form).await
}

#[get("/me")]
async fn get_my_profile(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    profile_handler::get_my_profile(pool, claims).await
}
