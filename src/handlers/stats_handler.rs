use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Serialize;
use sqlx::PgPool;

use crate::auth::jwt::Claims;
use crate::db::{competitions, profiles, workouts};
use crate::errors::ApiError;
use crate::models::competition::Competition;
use crate::stats;
use crate::stats::StrengthRecord;

const VOLUME_WEEKS: usize = 4;
const RACE_SERIES_LEN: usize = 7;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub weekly_distance_km: f64,
    pub streak_days: i64,
    pub weekly_volumes: Vec<f64>,
    pub personal_best: Option<Competition>,
    pub strength_prs: Vec<StrengthRecord>,
    pub race_time_series: Vec<f64>,
}

/// The aggregates the dashboard renders, computed from the caller's raw
/// logs. Without a profile the main-event figures stay empty but training
/// totals are still returned.
#[tracing::instrument(
    name = "Compute dashboard stats",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn dashboard_stats(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user_id = claims.user_id().ok_or(ApiError::InvalidToken)?;

    let profile = profiles::get_profile(&pool, user_id).await?;
    let workouts = workouts::list_recent(&pool, user_id).await?;
    let competitions = competitions::list_recent(&pool, user_id).await?;

    let today = Utc::now().date_naive();
    let main_event = profile.as_ref().map(|p| p.main_event.as_str());

    let personal_best =
        main_event.and_then(|event| stats::personal_best(&competitions, event).cloned());
    let race_time_series = main_event
        .map(|event| stats::race_time_series(&competitions, event, RACE_SERIES_LEN))
        .unwrap_or_default();

    let response = DashboardStats {
        weekly_distance_km: stats::weekly_distance_km(&workouts, today),
        streak_days: stats::current_streak(&workouts, today),
        weekly_volumes: stats::weekly_volume_series(&workouts, today, VOLUME_WEEKS),
        personal_best,
        strength_prs: stats::strength_personal_records(&workouts),
        race_time_series,
    };

    Ok(HttpResponse::Ok().json(response))
}
