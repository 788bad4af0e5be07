use actix_web::{web, HttpResponse};
use log::warn;
use utoipa::OpenApi;

use crate::constants::MSG_SERVER_RUNNING;
use crate::errors::ApiError;
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(health_check))
            // OpenAPI document
            .route("/openapi.json", web::get().to(openapi_json))
            .service(
                web::scope("/users")
                    .route("", web::get().to(handlers::get_users))
                    .route("", web::post().to(handlers::create_user))
                    .route("/{id}", web::get().to(handlers::get_user))
                    .route("/{id}", web::put().to(handlers::update_user))
                    // PATCH behaves exactly like PUT: full replacement
                    .route("/{id}", web::patch().to(handlers::update_user))
                    .route("/{id}", web::delete().to(handlers::delete_user)),
            ),
    );
}

/// Malformed or mistyped JSON bodies become a 400 in the API error shape.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected request body: {}", err);
        ApiError::invalid_body(err).into()
    })
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
