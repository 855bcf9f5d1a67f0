pub mod bias;
pub mod config;

pub use bias::{AnalysisItem, AnalysisPayload, BiasLabel, Judgment, ResultEntry};
pub use config::{Config, LlmConfig};
