//! Merging and filtering of raw LLM judgments

use std::collections::BTreeMap;

use serde_json::Value;

use crate::model::{BiasLabel, Judgment, ResultEntry};
use crate::service::bias::error::BiasAnalysisError;

/// Turn raw judgments into the caller-facing result list
///
/// Neutral judgments are dropped, the rest are paired with the caller's own
/// paragraph text and ordered by index. A repeated index keeps the last
/// non-neutral judgment seen. Only judgments that survive the neutral check
/// need an integer index inside `paragraphs`.
pub fn filter_judgments(
    paragraphs: &[String],
    raw: Vec<Value>,
) -> Result<Vec<ResultEntry>, BiasAnalysisError> {
    let mut results: BTreeMap<usize, ResultEntry> = BTreeMap::new();

    for value in &raw {
        let judgment = Judgment::from_value(value)
            .ok_or_else(|| BiasAnalysisError::InvalidJudgment(format!("not an object: {value}")))?;

        let label = judgment.label();
        if BiasLabel::is_neutral(&label) {
            continue;
        }

        let raw_index = judgment.index().ok_or_else(|| {
            BiasAnalysisError::InvalidJudgment(format!("missing integer index: {value}"))
        })?;

        if !BiasLabel::ALL.contains(&&*label) {
            tracing::debug!(
                label = %label,
                index = raw_index,
                "Label outside known taxonomy"
            );
        }

        let index = usize::try_from(raw_index)
            .ok()
            .filter(|i| *i < paragraphs.len())
            .ok_or(BiasAnalysisError::IndexOutOfRange {
                index: raw_index,
                len: paragraphs.len(),
            })?;

        results.insert(
            index,
            ResultEntry {
                index,
                text: paragraphs[index].clone(),
                label: label.into_owned(),
                reason: judgment.reason().into_owned(),
            },
        );
    }

    Ok(results.into_values().collect())
}
