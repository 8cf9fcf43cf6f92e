// src/api/handlers/fields.rs

use std::collections::HashMap;
use actix_web::{web, HttpResponse, Responder};
use log::{info, warn};
use serde_json::{Map, Value};

use crate::api::types::FillResponse;
use crate::fields::{Model, PasswordGenerator};

/// Describe the password field
///
/// Returns the component name, attribute and every configured option.
#[utoipa::path(
    get,
    path = "/fields/password",
    tag = "Fields",
    responses(
        (status = 200, description = "Serialized field for the renderer", body = Object)
    )
)]
pub async fn describe_field(field: web::Data<PasswordGenerator>) -> impl Responder {
    HttpResponse::Ok().json(field.json_serialize())
}

/// Fill a record from a form submission
///
/// Hashes the submitted password into a fresh record. A submission without
/// the field's key leaves the record untouched.
#[utoipa::path(
    post,
    path = "/fields/password/fill",
    tag = "Fields",
    request_body(content = Object, description = "Submitted form values"),
    responses(
        (status = 200, description = "Submission processed", body = FillResponse),
        (status = 500, description = "Hashing failed", body = FillResponse)
    )
)]
pub async fn fill_field(
    field: web::Data<PasswordGenerator>,
    submission: web::Json<Map<String, Value>>,
) -> impl Responder {
    let mut record: HashMap<String, String> = HashMap::new();

    match field.fill(&submission.into_inner(), &mut record) {
        Ok(filled) => {
            info!("Processed submission for '{}' (filled: {})", field.attribute(), filled);
            HttpResponse::Ok().json(FillResponse {
                success: true,
                filled,
                value: record.attribute(field.attribute()).map(String::from),
                error: None,
            })
        }
        Err(e) => {
            warn!("Failed to fill '{}': {}", field.attribute(), e);
            HttpResponse::InternalServerError().json(FillResponse {
                success: false,
                filled: false,
                value: None,
                error: Some(format!("Failed to hash password: {}", e)),
            })
        }
    }
}
