// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;
use crate::fields::PasswordGenerator;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::fields::describe_field,
        crate::api::handlers::fields::fill_field,
    ),
    components(
        schemas(
            crate::api::types::FillResponse,
            crate::models::OptionKey,
            crate::models::OptionValue,
        )
    ),
    tags(
        (name = "Fields", description = "Password-generator field endpoints")
    ),
    info(
        title = "Password Generator Field API",
        version = "0.1.0",
        description = "Serves the password-generator field and fills records from form submissions",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(field: PasswordGenerator, config: &Config) -> std::io::Result<()> {
    log::info!(
        "Starting password field API server on {}:{}",
        config.web_address, config.web_port
    );

    let field_data = web::Data::new(field);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(field_data.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((config.web_address.as_str(), config.web_port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_field_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/fields/password"));
        assert!(doc.paths.paths.contains_key("/fields/password/fill"));
    }
}
