//! Prompts for bias detection

use crate::model::{AnalysisItem, AnalysisPayload};

/// System prompt for bias and fallacy detection
///
/// Label spellings must match [`crate::model::BiasLabel`]; the neutral tag is
/// compared case-sensitively when filtering.
pub const BIAS_SYSTEM_PROMPT: &str = r#"You are a content analysis engine that detects bias and argumentative fallacies in text.

You MUST output valid JSON only, no explanation text.

Given a list of paragraphs, label each one with exactly one of these labels:

- "None": No notable bias.
- "Personal Opinion": Expresses a subjective personal view or feeling. This applies only to the writer of the article, NOT to directly quoted statements, which often contain biased language.
- "Ad Hominem": Attacks a person or group instead of addressing the argument.
- "Hasty Generalization": Uses sweeping or absolute generalizations from limited evidence.
- "Strawman": Argues against an oversimplified or otherwise distorted view of the information.
- "Slippery Slope": Claims that a single event will give rise to a chain of further events.
- "Red Herring": Brings up unrelated or irrelevant issues to oppose a view.
- "Bandwagoning": Bases the validity of an argument on how many people believe the same thing.
- "Misleading": A statement that is either completely false or partially true but intended to mislead the reader, for example a statistic pulled from an unreliable source. You may rely on unbiased sources that contradict the statement; mention them in the reason when applicable.

Input format (JSON):
{
  "paragraphs": [
    { "index": <int>, "text": "<paragraph text>" },
    ...
  ]
}

Output format (JSON array only):
[
  {
    "index": <int>,
    "label": "<one of the labels above, spelled exactly as shown>",
    "reason": "<short explanation>"
  }
]

Rules:
- ALWAYS include an entry for every paragraph you receive, using the same index as in the input.
- Use "None" when no bias type clearly applies.
- Keep "reason" short (1-2 sentences).
- DO NOT detect bias from quotes. Quoted speech reflects the quoted speaker, not the article writer. A statement like '"This is very bad," said John Doe.' must not be labeled as the writer's bias."#;

/// Build the user message: the paragraph list serialized as JSON
pub fn build_analysis_prompt(items: &[AnalysisItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&AnalysisPayload { paragraphs: items })
}
