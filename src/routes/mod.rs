use actix_web::web;

pub mod auth;
pub mod backend_health;
pub mod competitions;
pub mod profile;
pub mod registration;
pub mod stats;
pub mod workouts;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(registration::signup)
            .service(auth::login)
            .service(backend_health::backend_health)
            // Everything below requires a valid bearer token
            .service(
                web::scope("/profile")
                    .wrap(AuthMiddleware)
                    .service(profile::create_profile)
                    .service(profile::get_my_profile),
            )
            .service(
                web::scope("/workouts")
                    .wrap(AuthMiddleware)
                    .service(workouts::log_workout)
                    .service(workouts::list_workouts),
            )
            .service(
                web::scope("/competitions")
                    .wrap(AuthMiddleware)
                    .service(competitions::create_competition)
                    .service(competitions::list_competitions)
                    .service(competitions::get_competition)
                    .service(competitions::update_competition)
                    .service(competitions::delete_competition),
            )
            .service(
                web::scope("/stats")
                    .wrap(AuthMiddleware)
                    .service(stats::dashboard),
            ),
    );
}
