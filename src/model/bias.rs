//! Request-scoped data types for bias analysis

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Bias and fallacy taxonomy used in the system prompt
///
/// The service never rejects a label outside this set; only [`BiasLabel::NEUTRAL`]
/// is special-cased when filtering results.
pub struct BiasLabel;

impl BiasLabel {
    /// Neutral tag meaning "no notable bias detected"
    pub const NEUTRAL: &'static str = "None";
    pub const PERSONAL_OPINION: &'static str = "Personal Opinion";
    pub const AD_HOMINEM: &'static str = "Ad Hominem";
    pub const HASTY_GENERALIZATION: &'static str = "Hasty Generalization";
    pub const STRAWMAN: &'static str = "Strawman";
    pub const SLIPPERY_SLOPE: &'static str = "Slippery Slope";
    pub const RED_HERRING: &'static str = "Red Herring";
    pub const BANDWAGONING: &'static str = "Bandwagoning";
    pub const MISLEADING: &'static str = "Misleading";

    /// All labels in prompt order, neutral first
    pub const ALL: [&'static str; 9] = [
        Self::NEUTRAL,
        Self::PERSONAL_OPINION,
        Self::AD_HOMINEM,
        Self::HASTY_GENERALIZATION,
        Self::STRAWMAN,
        Self::SLIPPERY_SLOPE,
        Self::RED_HERRING,
        Self::BANDWAGONING,
        Self::MISLEADING,
    ];

    /// Whether a label counts as "no bias". Empty labels are treated the same way.
    pub fn is_neutral(label: &str) -> bool {
        label.is_empty() || label == Self::NEUTRAL
    }
}

/// One paragraph as sent to the LLM
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisItem {
    pub index: usize,
    pub text: String,
}

impl AnalysisItem {
    /// Index paragraphs by their position in the request
    pub fn from_paragraphs(paragraphs: &[String]) -> Vec<Self> {
        paragraphs
            .iter()
            .enumerate()
            .map(|(index, text)| Self {
                index,
                text: text.clone(),
            })
            .collect()
    }
}

/// User message payload: `{ "paragraphs": [{ "index", "text" }, ...] }`
#[derive(Debug, Serialize)]
pub struct AnalysisPayload<'a> {
    pub paragraphs: &'a [AnalysisItem],
}

/// Per-paragraph verdict returned by the LLM, read field by field
///
/// The model output is loosely typed, so nothing is required up front:
/// `label` falls back to the neutral tag when absent or `null`, `reason` to an
/// empty string, and non-string values are kept as their JSON text. The
/// `index` only matters once a judgment is known to be non-neutral.
#[derive(Debug, Clone, Copy)]
pub struct Judgment<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> Judgment<'a> {
    /// View a raw array element as a judgment. Returns `None` for non-objects.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(|fields| Self { fields })
    }

    /// Integer index, if present
    pub fn index(&self) -> Option<i64> {
        self.fields.get("index").and_then(Value::as_i64)
    }

    pub fn label(&self) -> Cow<'a, str> {
        text_field(self.fields.get("label"), BiasLabel::NEUTRAL)
    }

    pub fn reason(&self) -> Cow<'a, str> {
        text_field(self.fields.get("reason"), "")
    }
}

fn text_field<'a>(field: Option<&'a Value>, default: &'static str) -> Cow<'a, str> {
    match field {
        None | Some(Value::Null) => Cow::Borrowed(default),
        Some(Value::String(text)) => Cow::Borrowed(text.as_str()),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

/// A non-neutral judgment joined with the caller's original paragraph text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResultEntry {
    /// Zero-based position of the paragraph in the request
    pub index: usize,
    /// Paragraph text exactly as submitted
    pub text: String,
    /// Bias label assigned by the model
    pub label: String,
    /// Short justification for the label
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_indexed_by_position() {
        let paragraphs = vec!["first".to_string(), "second".to_string()];
        let items = AnalysisItem::from_paragraphs(&paragraphs);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].index, 0);
        assert_eq!(items[1].index, 1);
        assert_eq!(items[1].text, "second");
    }

    #[test]
    fn test_payload_keeps_non_ascii_text() {
        let items = vec![AnalysisItem {
            index: 0,
            text: "Café – “quoted”".to_string(),
        }];
        let json = serde_json::to_string(&AnalysisPayload { paragraphs: &items }).unwrap();

        assert_eq!(
            json,
            r#"{"paragraphs":[{"index":0,"text":"Café – “quoted”"}]}"#
        );
    }

    #[test]
    fn test_judgment_defaults() {
        let value = serde_json::json!({ "index": 3 });
        let judgment = Judgment::from_value(&value).unwrap();
        assert_eq!(judgment.index(), Some(3));
        assert_eq!(judgment.label(), BiasLabel::NEUTRAL);
        assert_eq!(judgment.reason(), "");

        let value = serde_json::json!({ "index": 0, "label": null, "reason": null });
        let judgment = Judgment::from_value(&value).unwrap();
        assert_eq!(judgment.label(), BiasLabel::NEUTRAL);
        assert_eq!(judgment.reason(), "");
    }

    #[test]
    fn test_judgment_loose_field_types() {
        let value = serde_json::json!({ "index": "0", "label": "Strawman", "reason": ["a", "b"] });
        let judgment = Judgment::from_value(&value).unwrap();

        assert_eq!(judgment.index(), None);
        assert_eq!(judgment.label(), "Strawman");
        assert_eq!(judgment.reason(), r#"["a","b"]"#);
    }

    #[test]
    fn test_judgment_requires_object() {
        assert!(Judgment::from_value(&serde_json::json!("Strawman")).is_none());
        assert!(Judgment::from_value(&serde_json::json!([1, 2])).is_none());
    }

    #[test]
    fn test_neutral_is_case_sensitive() {
        assert!(BiasLabel::is_neutral("None"));
        assert!(BiasLabel::is_neutral(""));
        assert!(!BiasLabel::is_neutral("none"));
        assert!(!BiasLabel::is_neutral(BiasLabel::STRAWMAN));
    }
}
