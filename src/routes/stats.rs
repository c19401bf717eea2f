use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::auth::jwt::Claims;
use crate::errors::ApiError;
use crate::handlers::stats_handler;

#[get("/dashboard")]
async fn dashboard(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    stats_handler::dashboard_stats(pool, claims).await
}
