//! Bias analysis service
//!
//! Indexes the caller's paragraphs, sends them to the LLM in one call and
//! returns the non-neutral judgments in paragraph order.

use crate::model::{AnalysisItem, ResultEntry};

pub mod detector;
pub mod error;
pub mod filter;
pub mod prompts;

pub use detector::BiasDetector;
pub use error::BiasAnalysisError;
pub use filter::filter_judgments;

/// Service for labeling bias in article paragraphs
pub struct BiasAnalysisService {
    detector: BiasDetector,
}

impl BiasAnalysisService {
    pub fn new(detector: BiasDetector) -> Self {
        Self { detector }
    }

    /// Analyze paragraphs and return only those with a non-neutral label
    pub async fn analyze(
        &self,
        paragraphs: &[String],
    ) -> Result<Vec<ResultEntry>, BiasAnalysisError> {
        if paragraphs.is_empty() {
            tracing::warn!("Empty paragraph list, nothing to analyze");
            return Ok(Vec::new());
        }

        tracing::info!(paragraph_count = paragraphs.len(), "Starting bias analysis");

        let items = AnalysisItem::from_paragraphs(paragraphs);
        let raw = self.detector.detect(&items).await?;
        let judgment_count = raw.len();
        let results = filter_judgments(paragraphs, raw)?;

        tracing::info!(
            paragraph_count = paragraphs.len(),
            judgment_count = judgment_count,
            flagged_count = results.len(),
            "Bias analysis complete"
        );

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::model::LlmConfig;
    use crate::service::llm::stub::StubBackend;

    fn service(backend: Arc<StubBackend>) -> BiasAnalysisService {
        BiasAnalysisService::new(BiasDetector::new(backend, &LlmConfig::default()))
    }

    fn paragraphs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    const MIXED_REPLY: &str = r#"[
        {"index": 1, "label": "Ad Hominem", "reason": "Insults the senator."},
        {"index": 2, "label": "None", "reason": ""},
        {"index": 0, "label": "Misleading", "reason": "Statistic lacks context."}
    ]"#;

    #[tokio::test]
    async fn test_empty_input_makes_no_call() {
        let backend = Arc::new(StubBackend::replying(MIXED_REPLY));
        let service = service(backend.clone());

        let results = service.analyze(&[]).await.unwrap();

        assert!(results.is_empty());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_filters_and_orders() {
        let backend = Arc::new(StubBackend::replying(MIXED_REPLY));
        let service = service(backend.clone());

        let results = service
            .analyze(&paragraphs(&["A", "B", "C"]))
            .await
            .unwrap();

        let indices: Vec<usize> = results.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(results[0].text, "A");
        assert_eq!(results[0].label, "Misleading");
        assert_eq!(results[1].text, "B");
        assert_eq!(results[1].reason, "Insults the senator.");
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_sends_every_paragraph_in_one_call() {
        let backend = Arc::new(StubBackend::replying("[]"));
        let service = service(backend.clone());
        let input: Vec<String> = (0..50).map(|i| format!("Paragraph {i}")).collect();

        service.analyze(&input).await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        let payload: serde_json::Value = serde_json::from_str(&calls[0].prompt).unwrap();
        let sent = payload["paragraphs"].as_array().unwrap();
        assert_eq!(sent.len(), 50);
        assert_eq!(sent[49]["index"], 49);
        assert_eq!(sent[49]["text"], "Paragraph 49");
    }

    #[tokio::test]
    async fn test_deterministic_for_same_input() {
        let backend = Arc::new(StubBackend::replying(MIXED_REPLY));
        let service = service(backend);
        let input = paragraphs(&["A", "B", "C"]);

        let first = service.analyze(&input).await.unwrap();
        let second = service.analyze(&input).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_malformed_reply_fails_whole_request() {
        let backend = Arc::new(StubBackend::replying("```json\n[]\n```"));
        let service = service(backend);

        let err = service.analyze(&paragraphs(&["A"])).await.unwrap_err();

        assert!(err.to_string().contains("```json"));
    }

    #[tokio::test]
    async fn test_out_of_range_index_fails() {
        let backend = Arc::new(StubBackend::replying(
            r#"[{"index": 5, "label": "Strawman", "reason": "x"}]"#,
        ));
        let service = service(backend);

        let err = service.analyze(&paragraphs(&["A"])).await.unwrap_err();

        assert!(matches!(
            err,
            BiasAnalysisError::IndexOutOfRange { index: 5, len: 1 }
        ));
    }
}
