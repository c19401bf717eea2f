// src/models/auth.rs
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(
        serialize_with = "crate::models::user::serialize_secret_string",
        deserialize_with = "crate::models::user::deserialize_secret_string"
    )]
    pub password: SecretString,
}

/// Shared by signup and login: a human-readable message plus the bearer token.
#[derive(Serialize, Deserialize)]
pub struct TokenResponse {
    pub message: String,
    pub token: String,
}
