pub mod auth;
pub mod competition;
pub mod profile;
pub mod user;
pub mod workout;
