//! REST API endpoint for paragraph bias analysis

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::{ApiError, ErrorResponse};
use crate::model::ResultEntry;
use crate::service::BiasAnalysisService;

/// Request body for bias analysis
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Article paragraphs in reading order
    pub paragraphs: Vec<String>,
}

/// Label bias in article paragraphs
///
/// Returns only the paragraphs that received a non-neutral label, ordered by
/// their position in the request.
#[utoipa::path(
    post,
    path = "/api/analyze-bias",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Paragraphs with detected bias", body = Vec<ResultEntry>),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 502, description = "LLM call failed or returned an invalid response", body = ErrorResponse),
        (status = 504, description = "LLM call timed out", body = ErrorResponse)
    ),
    tag = "bias"
)]
#[post("/api/analyze-bias")]
pub async fn analyze_bias(
    service: web::Data<BiasAnalysisService>,
    body: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    let results = service.analyze(&request.paragraphs).await?;
    Ok(HttpResponse::Ok().json(results))
}

/// Configure bias analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze_bias);
}
