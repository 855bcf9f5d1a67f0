//! Application state and service initialization
//!
//! This module centralizes service initialization and dependency injection.
//! The LLM client is built once here and handed to the services that need it.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::api;
use crate::model::Config;
use crate::service::llm::CompletionBackend;
use crate::service::{BiasAnalysisService, BiasDetector, LlmClient};

/// Environment variable holding the LLM provider credential
const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Application state containing all services and shared resources
#[derive(Clone)]
pub struct AppState {
    /// Bias analysis service shared by all workers
    pub bias_service: web::Data<BiasAnalysisService>,
    /// JSON request body limit
    pub max_payload_bytes: usize,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// Requires `OPENAI_API_KEY` in the environment.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let api_key = std::env::var(ENV_OPENAI_API_KEY)
            .map_err(|_| AppError::MissingConfig(ENV_OPENAI_API_KEY))?;

        let llm_client =
            LlmClient::new(&api_key).map_err(|_| AppError::InvalidConfig("Invalid OPENAI_API_KEY"))?;

        Ok(Self::with_backend(Arc::new(llm_client), config))
    }

    /// Build application state around an already constructed LLM backend
    pub fn with_backend(backend: Arc<dyn CompletionBackend>, config: &Config) -> Self {
        let detector = BiasDetector::new(backend, &config.llm);

        Self {
            bias_service: web::Data::new(BiasAnalysisService::new(detector)),
            max_payload_bytes: config.server.max_payload_bytes,
        }
    }

    /// Build the actix application: CORS, shared state, and every route
    pub fn into_app(
        self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(Cors::permissive())
            .app_data(self.bias_service)
            .app_data(api::json_config(self.max_payload_bytes))
            .configure(api::health::configure)
            .configure(api::bias::configure)
            .configure(api::openapi::configure)
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
