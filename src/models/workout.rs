use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single timed run within an interval set. `time` keeps the client's
/// fixed-width "mm:ss:ms" form, where the last field is hundredths.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Rep {
    pub distance: f64,
    pub time: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntervalSet {
    pub reps: Vec<Rep>,
    pub rep_rest: Option<String>,
    pub set_rest: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub weight: f64,
    pub reps: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutType {
    Sprint,
    Endurance,
    Strength,
}

impl WorkoutType {
    /// Interval workouts carry sets; strength workouts carry exercises.
    pub fn is_interval(&self) -> bool {
        !matches!(self, WorkoutType::Strength)
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorkoutType::Sprint => "Sprint",
            WorkoutType::Endurance => "Endurance",
            WorkoutType::Strength => "Strength",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for WorkoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sprint" => Ok(WorkoutType::Sprint),
            "Endurance" => Ok(WorkoutType::Endurance),
            "Strength" => Ok(WorkoutType::Strength),
            other => Err(format!("{} is not a known workout type", other)),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub session: Option<String>,
    pub workout_type: WorkoutType,
    pub sets: Vec<IntervalSet>,
    pub exercises: Vec<Exercise>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogWorkoutRequest {
    pub date: NaiveDate,
    pub session: Option<String>,
    pub workout_type: WorkoutType,
    #[serde(default)]
    pub sets: Vec<IntervalSet>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    pub notes: Option<String>,
}

impl LogWorkoutRequest {
    /// The shape invariant: exactly one of sets/exercises survives,
    /// picked by the workout type. The other side is dropped, not rejected.
    pub fn shaped(self) -> (Vec<IntervalSet>, Vec<Exercise>) {
        if self.workout_type.is_interval() {
            (self.sets, Vec::new())
        } else {
            (Vec::new(), self.exercises)
        }
    }
}
