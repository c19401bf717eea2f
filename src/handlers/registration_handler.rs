use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::auth::jwt::generate_token;
use crate::config::settings::JwtSettings;
use crate::db::users;
use crate::errors::ApiError;
use crate::models::auth::TokenResponse;
use crate::models::user::SignupRequest;
use crate::utils::password::hash_password;

#[tracing::instrument(
    name = "Signing up a new user",
    // Don't show arguments
    skip(signup_form, pool, jwt_settings),
    fields(
        username = %signup_form.username,
        email = %signup_form.email
    )
)]
pub async fn signup_user(
    signup_form: web::Json<SignupRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse, ApiError> {
    if users::email_exists(&pool, &signup_form.email).await? {
        return Err(ApiError::Conflict("Email already used".to_string()));
    }

    let password_hash =
        hash_password(signup_form.password.expose_secret()).map_err(ApiError::PasswordHash)?;
    let user_id = users::insert_user(
        &pool,
        &signup_form.username,
        &signup_form.email,
        &password_hash,
    )
    .await
    .map_err(|e| {
        // Two signups can race past the existence check; the unique index
        // on email settles it.
        if e.as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            ApiError::Conflict("Email already used".to_string())
        } else {
            ApiError::from(e)
        }
    })?;

    let token = generate_token(user_id, &signup_form.username, &jwt_settings).map_err(|e| {
        tracing::error!("Error generating JWT token: {:?}", e);
        ApiError::TokenCreation
    })?;

    Ok(HttpResponse::Created().json(TokenResponse {
        message: "Signup successful".to_string(),
        token,
    }))
}
