pub mod auth_handler;
pub mod backend_health_handler;
pub mod competition_handler;
pub mod profile_handler;
pub mod registration_handler;
pub mod stats_handler;
pub mod workout_handler;
