use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const DEFAULT_COMPETITION_NAME: &str = "Untitled Competition";
pub const DEFAULT_DISTANCE: &str = "100m";
pub const DEFAULT_ROUND_TYPE: &str = "Final";

/// A client may submit "00:00:00" from an untouched time picker; it counts
/// as missing, not as a zero-second race.
const ZERO_RACE_TIME: &str = "00:00:00";

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: Uuid,
    pub user_id: Uuid,
    pub race_time: String,
    pub competition_name: String,
    #[serde(rename = "date")]
    pub event_date: NaiveDate,
    pub location: String,
    pub distance: String,
    pub round_type: String,
    pub wind: Option<String>,
    pub position: Option<String>,
    pub lane: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload. Required fields are optional here so validation
/// can name every missing one instead of failing at deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionRequest {
    pub race_time: Option<String>,
    pub competition_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub distance: Option<String>,
    pub round_type: Option<String>,
    pub wind: Option<String>,
    pub position: Option<String>,
    pub lane: Option<String>,
}

impl CompetitionRequest {
    /// Required-field check, identical on create and update. The labels
    /// match what the competition form shows the athlete.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        match self.race_time.as_deref() {
            None | Some("") | Some(ZERO_RACE_TIME) => missing.push("Race Time".to_string()),
            Some(_) => {}
        }
        if self.date.is_none() {
            missing.push("Date".to_string());
        }
        match self.location.as_deref() {
            Some(location) if !location.trim().is_empty() => {}
            _ => missing.push("Location".to_string()),
        }
        missing
    }
}
