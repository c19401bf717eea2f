use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::competition::Competition;
use crate::models::workout::Workout;

/// Parse a fixed-width "mm:ss:ms" race time into seconds. The third field
/// is hundredths, not thousandths; stored data depends on this scale, so it
/// stays even though it reads like a unit bug.
pub fn race_time_seconds(raw: &str) -> Option<f64> {
    let mut parts = raw.split(':');
    let minutes: f64 = parts.next()?.parse().ok()?;
    let seconds: f64 = parts.next()?.parse().ok()?;
    let hundredths: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(minutes * 60.0 + seconds + hundredths / 100.0)
}

/// The Monday of the week containing `today`.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(today.weekday().num_days_from_monday() as i64)
}

/// Total interval distance of one workout in kilometers. Strength workouts
/// have no sets and contribute 0.
pub fn workout_distance_km(workout: &Workout) -> f64 {
    workout
        .sets
        .iter()
        .flat_map(|set| set.reps.iter())
        .map(|rep| rep.distance / 1000.0)
        .sum()
}

/// Distance covered in the week containing `today` (Monday start).
pub fn weekly_distance_km(workouts: &[Workout], today: NaiveDate) -> f64 {
    let monday = week_start(today);
    workouts
        .iter()
        .filter(|w| w.date >= monday)
        .map(workout_distance_km)
        .sum()
}

/// Consecutive training days ending today or yesterday. Walks the workout
/// dates newest-first; a date whose gap from `today` equals the running
/// streak or streak + 1 extends it to gap + 1, anything else breaks it.
pub fn current_streak(workouts: &[Workout], today: NaiveDate) -> i64 {
    let mut dates: Vec<NaiveDate> = workouts.iter().map(|w| w.date).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak = 0i64;
    for date in dates {
        let gap = (today - date).num_days();
        if gap == streak || gap == streak + 1 {
            streak = gap + 1;
        } else {
            break;
        }
    }
    streak
}

/// Fastest result among competitions run over the athlete's main event.
/// Entries whose time fails to parse are skipped; the earliest-listed record
/// wins exact ties.
pub fn personal_best<'a>(
    competitions: &'a [Competition],
    main_event: &str,
) -> Option<&'a Competition> {
    let mut best: Option<(&Competition, f64)> = None;
    for competition in competitions {
        if competition.distance != main_event {
            continue;
        }
        let Some(seconds) = race_time_seconds(&competition.race_time) else {
            continue;
        };
        match best {
            Some((_, best_seconds)) if seconds >= best_seconds => {}
            _ => best = Some((competition, seconds)),
        }
    }
    best.map(|(competition, _)| competition)
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrengthRecord {
    pub name: String,
    pub weight: f64,
    pub reps: i32,
}

/// Heaviest entry per distinct exercise name across all strength workouts,
/// first-encountered winning ties. Output keeps first-seen name order.
pub fn strength_personal_records(workouts: &[Workout]) -> Vec<StrengthRecord> {
    let mut records: Vec<StrengthRecord> = Vec::new();
    for exercise in workouts
        .iter()
        .filter(|w| !w.workout_type.is_interval())
        .flat_map(|w| w.exercises.iter())
    {
        match records.iter_mut().find(|r| r.name == exercise.name) {
            Some(record) => {
                if exercise.weight > record.weight {
                    record.weight = exercise.weight;
                    record.reps = exercise.reps;
                }
            }
            None => records.push(StrengthRecord {
                name: exercise.name.clone(),
                weight: exercise.weight,
                reps: exercise.reps,
            }),
        }
    }
    records
}

/// Distance totals for the last `weeks` Monday-aligned weeks, oldest first.
/// The last element is the week containing `today`.
pub fn weekly_volume_series(workouts: &[Workout], today: NaiveDate, weeks: usize) -> Vec<f64> {
    let mut series = vec![0.0; weeks];
    let current_monday = week_start(today);
    for i in 0..weeks {
        let monday = current_monday - Duration::days(7 * i as i64);
        let sunday = monday + Duration::days(6);
        series[weeks - 1 - i] = workouts
            .iter()
            .filter(|w| w.date >= monday && w.date <= sunday)
            .map(workout_distance_km)
            .sum();
    }
    series
}

/// Race times (seconds) of the `n` most recent main-event competitions,
/// oldest first, for the progress chart. Expects `competitions` newest-first,
/// as the listing endpoint returns them.
pub fn race_time_series(competitions: &[Competition], main_event: &str, n: usize) -> Vec<f64> {
    let mut series: Vec<f64> = competitions
        .iter()
        .filter(|c| c.distance == main_event)
        .take(n)
        .filter_map(|c| race_time_seconds(&c.race_time))
        .collect();
    series.reverse();
    series
}
