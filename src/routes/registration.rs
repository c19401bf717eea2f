use actix_web::{post, web, HttpResponse};
use sqlx::PgPool;

use crate::config::settings::JwtSettings;
use crate::errors::ApiError;
use crate::handlers::registration_handler::signup_user;
use crate::models::user::SignupRequest;

#[post("/signup")]
async fn signup(
    signup_form: web::Json<SignupRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse, ApiError> {
    signup_user(signup_form, pool, jwt_settings).await
}
