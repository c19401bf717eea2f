// src/handlers/auth_handler.rs
use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::auth::jwt::generate_token;
use crate::config::settings::JwtSettings;
use crate::db::users;
use crate::errors::ApiError;
use crate::models::auth::{LoginRequest, TokenResponse};
use crate::utils::password::verify_password;

#[tracing::instrument(
    name = "Login user attempt",
    skip(login_form, pool, jwt_settings),
    fields(
        email = %login_form.email
    )
)]
pub async fn login_user(
    login_form: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse, ApiError> {
    let user = match users::find_by_email(&pool, &login_form.email).await? {
        Some(user) => user,
        None => {
            tracing::info!("No account for the given email");
            return Err(ApiError::InvalidCredentials);
        }
    };

    if !verify_password(login_form.password.expose_secret(), &user.password_hash) {
        tracing::info!("Invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = generate_token(user.id, &user.username, &jwt_settings).map_err(|e| {
        tracing::error!("Error generating JWT token: {:?}", e);
        ApiError::TokenCreation
    })?;

    Ok(HttpResponse::Ok().json(TokenResponse {
        message: "Login successful".to_string(),
        token,
    }))
}
