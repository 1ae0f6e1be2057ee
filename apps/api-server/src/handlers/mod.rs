//! HTTP handlers and route configuration.

mod health;
mod reservations;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/reservations")
                    .route("", web::get().to(reservations::list_reservations))
                    .route("", web::post().to(reservations::create_reservation))
                    .route("/{id}", web::put().to(reservations::update_reservation))
                    .route("/{id}", web::delete().to(reservations::delete_reservation)),
            ),
    );
}
