//! Dashboard aggregates, computed as pure functions over raw logs so they
//! can be tested without a server or a database.

mod aggregates;

pub use aggregates::{
    current_streak, personal_best, race_time_seconds, race_time_series,
    strength_personal_records, week_start, weekly_distance_km, weekly_volume_series,
    workout_distance_km, StrengthRecord,
};
