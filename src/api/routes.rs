// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Password field routes
    cfg.service(
        web::scope("/fields/password")
            // GET: Serialized field for the renderer
            .route("", web::get().to(handlers::fields::describe_field))
            // POST: Fill a record from a submission
            .route("/fill", web::post().to(handlers::fields::fill_field))
    );
}
