use actix_web::web;

pub mod health;
pub mod ping;

/// Route table shared by the server and the tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::health_check))
        .route("/ping", web::post().to(ping::ping));
}
