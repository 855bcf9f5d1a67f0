//! Shared LLM client and interaction utilities
//!
//! Provides the [`CompletionBackend`] seam used by the bias detector and the
//! OpenAI-backed implementation built on rig.

use async_trait::async_trait;
use rig::completion::Prompt;
use rig::prelude::*;
use rig::providers::openai;

/// Error returned by a completion backend
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    Request(String),
}

/// Parameters for a single text completion
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    /// System instruction
    pub preamble: &'a str,
    /// User message
    pub prompt: &'a str,
    pub temperature: f64,
    pub max_tokens: u64,
}

/// A text-completion service reachable over the network
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send one request and return the model's text output
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError>;
}

/// Shared LLM client wrapper
#[derive(Clone)]
pub struct LlmClient {
    client: openai::Client,
}

impl LlmClient {
    /// Create a new LLM client with the provided API key
    pub fn new(api_key: &str) -> Result<Self, String> {
        let client = openai::Client::new(api_key)
            .map_err(|e| format!("Failed to create OpenAI client: {}", e))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl CompletionBackend for LlmClient {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError> {
        let agent = self
            .client
            .agent(request.model)
            .preamble(request.preamble)
            .temperature(request.temperature)
            .max_tokens(request.max_tokens)
            .build();

        agent
            .prompt(request.prompt.to_string())
            .await
            .map_err(|e| LlmError::Request(e.to_string()))
    }
}
