pub mod bias;
pub mod llm;

pub use bias::{BiasAnalysisService, BiasDetector};
pub use llm::LlmClient;
