// Route exports
pub mod ranking;

use actix_web::web;

pub use ranking::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(ranking::index))
        .route("/save", web::post().to(ranking::save_submission))
        .service(
            web::scope("/api/v1")
                .configure(ranking::configure),
        );
}
