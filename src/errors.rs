use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

/// Error taxonomy shared by every handler. Each variant maps to exactly one
/// HTTP status, and the response body never exposes store internals.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No token provided")]
    MissingToken,
    #[error("Invalid token")]
    InvalidToken,
    // One message for unknown email and wrong password alike, so the
    // endpoint cannot be used to enumerate accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    Conflict(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Please fill in the following required fields: {}", .missing_fields.join(", "))]
    Validation { missing_fields: Vec<String> },
    #[error("Internal server error")]
    TokenCreation,
    #[error("Internal server error")]
    PasswordHash(#[source] bcrypt::BcryptError),
    #[error("Internal server error")]
    Store(#[source] sqlx::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Store(e)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingToken | ApiError::InvalidToken | ApiError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            // The API contract uses 400 for duplicate email, not 409
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::TokenCreation | ApiError::PasswordHash(_) | ApiError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Store(e) => tracing::error!("Store failure: {:?}", e),
            ApiError::PasswordHash(e) => tracing::error!("Password hashing failure: {:?}", e),
            _ => {}
        }
        let body = match self {
            ApiError::Validation { missing_fields } => json!({
                "success": false,
                "message": self.to_string(),
                "missingFields": missing_fields,
            }),
            _ => json!({ "message": self.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
