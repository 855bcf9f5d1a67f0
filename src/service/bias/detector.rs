//! Single-call bias detection against the LLM
//!
//! Sends every paragraph in one request and checks that the reply is a JSON
//! array. Individual judgments are returned as-is; field handling happens in
//! [`super::filter`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::model::{AnalysisItem, LlmConfig};
use crate::service::bias::error::BiasAnalysisError;
use crate::service::bias::prompts::{BIAS_SYSTEM_PROMPT, build_analysis_prompt};
use crate::service::llm::{CompletionBackend, CompletionRequest};

/// Decoding temperature; fixed for run-to-run stability
const TEMPERATURE: f64 = 0.0;

/// Issues the bias-detection call and validates the response shape
#[derive(Clone)]
pub struct BiasDetector {
    backend: Arc<dyn CompletionBackend>,
    model: String,
    max_output_tokens: u64,
    timeout: Option<Duration>,
}

impl BiasDetector {
    pub fn new(backend: Arc<dyn CompletionBackend>, config: &LlmConfig) -> Self {
        tracing::info!(
            model = %config.model,
            max_output_tokens = config.max_output_tokens,
            timeout_secs = ?config.timeout_secs,
            "Bias detector initialized"
        );

        Self {
            backend,
            model: config.model.clone(),
            max_output_tokens: config.max_output_tokens,
            timeout: config.timeout(),
        }
    }

    /// Ask the LLM for one judgment per item
    ///
    /// Returns the parsed array elements unmodified. An empty `items` slice
    /// returns immediately without calling the backend.
    pub async fn detect(&self, items: &[AnalysisItem]) -> Result<Vec<Value>, BiasAnalysisError> {
        if items.is_empty() {
            tracing::debug!("No paragraphs to analyze");
            return Ok(Vec::new());
        }

        let prompt = build_analysis_prompt(items)
            .map_err(|e| BiasAnalysisError::Payload(e.to_string()))?;

        tracing::debug!(
            model = %self.model,
            paragraph_count = items.len(),
            prompt_length = prompt.len(),
            "Initiating LLM call for bias detection"
        );

        let start_time = Instant::now();
        let request = CompletionRequest {
            model: &self.model,
            preamble: BIAS_SYSTEM_PROMPT,
            prompt: &prompt,
            temperature: TEMPERATURE,
            max_tokens: self.max_output_tokens,
        };

        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.backend.complete(request))
                .await
                .map_err(|_| BiasAnalysisError::Timeout(limit.as_secs()))?,
            None => self.backend.complete(request).await,
        };

        let output = match result {
            Ok(output) => output,
            Err(e) => {
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    error = %e,
                    "LLM call for bias detection failed"
                );
                return Err(BiasAnalysisError::Transport(e.to_string()));
            }
        };

        tracing::debug!(raw_output = %output, "LLM bias detection raw output");

        let judgments = parse_judgments(&output)?;

        tracing::info!(
            model = %self.model,
            elapsed_ms = start_time.elapsed().as_millis(),
            paragraph_count = items.len(),
            judgment_count = judgments.len(),
            empty_output = output.trim().is_empty(),
            "LLM call for bias detection completed"
        );

        Ok(judgments)
    }
}

/// Parse the raw model output as a JSON array
fn parse_judgments(output: &str) -> Result<Vec<Value>, BiasAnalysisError> {
    let parsed: Value =
        serde_json::from_str(output).map_err(|source| BiasAnalysisError::MalformedResponse {
            raw: output.to_string(),
            source,
        })?;

    match parsed {
        Value::Array(items) => Ok(items),
        other => Err(BiasAnalysisError::UnexpectedShape(other.to_string())),
    }
}
