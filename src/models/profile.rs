use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The athlete profile as stored and returned. One row per user; BMI is
/// derived from height/weight on every write, never taken from the caller.
#[derive(Debug, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub main_event: String,
    pub other_events: Vec<String>,
    pub personal_best_value: Option<String>,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub training_days_per_week: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProfileRequest {
    pub full_name: String,
    pub main_event: String,
    #[serde(default)]
    pub other_events: Vec<String>,
    pub personal_best_value: Option<String>,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub training_days_per_week: i32,
}

impl UpsertProfileRequest {
    /// Range checks on the biometric fields. Returns the labels of every
    /// offending field, not just the first.
    pub fn invalid_fields(&self) -> Vec<String> {
        let mut invalid = Vec::new();
        if !(self.height_cm > 0.0) {
            invalid.push("Height".to_string());
        }
        if !(self.weight_kg > 0.0) {
            invalid.push("Weight".to_string());
        }
        if !(1..=7).contains(&self.training_days_per_week) {
            invalid.push("Training Days Per Week".to_string());
        }
        invalid
    }
}

/// Append "m" to event labels that end in a bare digit ("100" -> "100m").
/// A heuristic carried over from the client, not a unit parser.
pub fn normalize_event(value: &str) -> String {
    normalize_with_suffix(value, "m")
}

/// Append "s" to time values that end in a bare digit ("10.45" -> "10.45s").
pub fn normalize_time_value(value: &str) -> String {
    normalize_with_suffix(value, "s")
}

fn normalize_with_suffix(value: &str, suffix: &str) -> String {
    let v = value.trim();
    if v.chars().last().is_some_and(|c| c.is_ascii_digit()) {
        format!("{}{}", v, suffix)
    } else {
        v.to_string()
    }
}

/// Normalize a list of secondary events, dropping blanks and duplicates
/// while keeping first-seen order.
pub fn normalize_other_events(events: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for event in events {
        if event.trim().is_empty() {
            continue;
        }
        let normalized = normalize_event(event);
        if !seen.contains(&normalized) {
            seen.push(normalized);
        }
    }
    seen
}

/// BMI = weight / (height/100)^2, rounded to one decimal.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let hm = height_cm / 100.0;
    (weight_kg / (hm * hm) * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_with_trailing_digit_gets_metre_suffix() {
        assert_eq!(normalize_event("100"), "100m");
        assert_eq!(normalize_event(" 200 "), "200m");
    }

    #[test]
    fn event_with_unit_is_unchanged() {
        assert_eq!(normalize_event("100m"), "100m");
        assert_eq!(normalize_event("Long Jump"), "Long Jump");
    }

    #[test]
    fn personal_best_gets_seconds_suffix() {
        assert_eq!(normalize_time_value("10.45"), "10.45s");
        assert_eq!(normalize_time_value("10.45s"), "10.45s");
    }

    #[test]
    fn other_events_filter_blanks_and_duplicates() {
        let input = vec![
            "200".to_string(),
            "".to_string(),
            "200m".to_string(),
            "400".to_string(),
        ];
        assert_eq!(normalize_other_events(&input), vec!["200m", "400m"]);
    }

    #[test]
    fn bmi_matches_formula_rounded_to_one_decimal() {
        assert_eq!(compute_bmi(180.0, 75.0), 23.1);
        assert_eq!(compute_bmi(170.0, 65.0), 22.5);
    }

    #[test]
    fn range_validation_collects_every_offender() {
        let request = UpsertProfileRequest {
            full_name: "Test".into(),
            main_event: "100m".into(),
            other_events: vec![],
            personal_best_value: None,
            height_cm: 0.0,
            weight_kg: -2.0,
            training_days_per_week: 9,
        };
        assert_eq!(
            request.invalid_fields(),
            vec!["Height", "Weight", "Training Days Per Week"]
        );
    }
}
