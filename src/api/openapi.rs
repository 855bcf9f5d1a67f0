//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

use crate::api::{bias, error, health};
use crate::model::ResultEntry;

#[derive(OpenApi)]
#[openapi(
    paths(bias::analyze_bias, health::root, health::health),
    components(schemas(
        bias::AnalyzeRequest,
        ResultEntry,
        error::ErrorResponse,
        health::RootStatus,
        health::HealthStatus
    )),
    tags(
        (name = "bias", description = "Bias and fallacy detection"),
        (name = "health", description = "Service health checks")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> impl Responder {
    match ApiDoc::openapi().to_yaml() {
        Ok(yaml) => HttpResponse::Ok().content_type("text/yaml").body(yaml),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render OpenAPI YAML");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
