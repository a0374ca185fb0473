use actix_web::web;

pub mod admin;
pub mod auth;
pub mod backend_health;
pub mod fixtures;
pub mod livescore;
pub mod registration;
pub mod users;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(livescore::live_rankings)
        .service(fixtures::fixtures)
        .service(fixtures::deadlines)
        .service(fixtures::match_detail)
        .service(users::user_detail)
        .service(users::privacy)
        .service(registration::register)
        .service(backend_health::backend_health)
        .service(auth::login);

    // Session termination (requires a valid token to acknowledge)
    cfg.service(
        web::scope("/logout")
            .wrap(AuthMiddleware)
            .service(auth::logout),
    );
    // Score corrections (require authentication)
    cfg.service(
        web::scope("/update_scores")
            .wrap(AuthMiddleware)
            .service(admin::round_for_update)
            .service(admin::save_scores),
    );
    // Prediction sheet ingestion (requires authentication)
    cfg.service(
        web::scope("/upload_predictions")
            .wrap(AuthMiddleware)
            .service(admin::upload_predictions),
    );
}
