pub mod competitions;
pub mod profiles;
pub mod users;
pub mod workouts;
