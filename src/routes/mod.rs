pub mod auth;
pub mod health;
pub mod tasks;

use actix_web::{error, web};
use log::warn;

use crate::error::AppError;

pub const INVALID_JSON_MESSAGE: &str = "Request body must be valid JSON";

/// JSON extractor settings: bodies are parsed whatever their `Content-Type`, and
/// any body that is not valid JSON for the handler's request type is answered
/// with a 400 envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, req| {
            warn!("Rejected body for {} {}: {}", req.method(), req.path(), err);
            error::Error::from(AppError::BadRequest(INVALID_JSON_MESSAGE.into()))
        })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health::landing)
        .service(health::health)
        .service(auth::register)
        .service(auth::login)
        .service(
            web::scope("/tasks")
                .service(tasks::get_tasks)
                .service(tasks::create_tasks)
                .service(tasks::rename_task)
                .service(tasks::delete_task),
        );
}
