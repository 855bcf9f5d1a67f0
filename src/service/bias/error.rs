//! Error types for bias analysis

use thiserror::Error;

/// Error type for bias analysis
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BiasAnalysisError {
    #[error("Failed to encode request payload: {0}")]
    Payload(String),

    #[error("LLM call failed: {0}")]
    Transport(String),

    #[error("LLM call timed out after {0}s")]
    Timeout(u64),

    #[error("LLM returned non JSON output: {raw}")]
    MalformedResponse {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("LLM output is not a list: {0}")]
    UnexpectedShape(String),

    #[error("LLM returned an invalid judgment: {0}")]
    InvalidJudgment(String),

    #[error("LLM returned judgment for paragraph {index}, but only {len} paragraphs were sent")]
    IndexOutOfRange { index: i64, len: usize },
}
