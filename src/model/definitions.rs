//! Component 2: fairness definition selection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DecisionStepInputType {
    #[default]
    Radio,
    Checklist,
    Multiselect,
}

/// Answer to a decision step. Radio steps hold a single string, checklist and
/// multiselect steps hold a list; the empty string and empty list both mean
/// "unanswered".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepAnswer {
    Single(String),
    Multiple(Vec<String>),
}

impl StepAnswer {
    pub fn is_answered(&self) -> bool {
        match self {
            StepAnswer::Single(s) => !s.is_empty(),
            StepAnswer::Multiple(v) => !v.is_empty(),
        }
    }

    /// Answer as shown to readers; list answers are comma-joined.
    pub fn display(&self) -> String {
        match self {
            StepAnswer::Single(s) => s.clone(),
            StepAnswer::Multiple(v) => v.join(", "),
        }
    }

    /// The unanswered value for the given input type.
    pub fn empty_for(input_type: DecisionStepInputType) -> Self {
        match input_type {
            DecisionStepInputType::Radio => StepAnswer::Single(String::new()),
            DecisionStepInputType::Checklist | DecisionStepInputType::Multiselect => {
                StepAnswer::Multiple(Vec::new())
            }
        }
    }
}

impl Default for StepAnswer {
    fn default() -> Self {
        StepAnswer::Single(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionStep {
    pub step: u32,
    pub question: String,
    pub input_type: DecisionStepInputType,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: StepAnswer,
    #[serde(default)]
    pub explanation: String,
}

impl DecisionStep {
    fn blank(step: u32, question: &str, input_type: DecisionStepInputType, options: &[&str]) -> Self {
        Self {
            step,
            question: question.to_string(),
            input_type,
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: StepAnswer::empty_for(input_type),
            explanation: String::new(),
        }
    }

    pub fn is_answered(&self) -> bool {
        self.answer.is_answered()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefinitionSelection {
    pub definition: String,
    pub justification: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeoffDoc {
    pub title: String,
    pub description: String,
    pub resolution: String,
}

/// Catalog entry describing one fairness definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FairnessDefinition {
    pub id: String,
    pub name: String,
    pub formula: String,
    pub plain_language: String,
    pub when_to_use: String,
    pub limitations: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct C2Data {
    pub decision_framework: Vec<DecisionStep>,
    pub primary_selection: DefinitionSelection,
    pub secondary_selection: DefinitionSelection,
    pub tradeoff: TradeoffDoc,
}

impl C2Data {
    pub fn answered_steps(&self) -> impl Iterator<Item = &DecisionStep> {
        self.decision_framework.iter().filter(|s| s.is_answered())
    }
}

impl Default for C2Data {
    fn default() -> Self {
        use DecisionStepInputType::*;

        Self {
            decision_framework: vec![
                DecisionStep::blank(1, "How reliable are outcome labels?", Radio, &["High", "Medium", "Low"]),
                DecisionStep::blank(
                    2,
                    "Which errors cause more harm?",
                    Radio,
                    &["False Positives", "False Negatives", "Both equally"],
                ),
                DecisionStep::blank(3, "Do base rates differ across groups?", Radio, &["Yes", "No", "Unknown"]),
                DecisionStep::blank(4, "Is score calibration critical?", Radio, &["Yes", "No", "N/A"]),
                DecisionStep::blank(5, "What legal requirements apply?", Checklist, &[]),
                DecisionStep::blank(6, "Which intersections require evaluation?", Multiselect, &[]),
                DecisionStep::blank(
                    7,
                    "Are there feedback loops?",
                    Radio,
                    &["Yes — High", "Yes — Medium", "Yes — Low", "No"],
                ),
            ],
            primary_selection: DefinitionSelection::default(),
            secondary_selection: DefinitionSelection::default(),
            tradeoff: TradeoffDoc::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_untagged_roundtrip_shapes() {
        let single: StepAnswer = serde_json::from_str("\"Low\"").unwrap();
        let multi: StepAnswer = serde_json::from_str("[\"a\",\"b\"]").unwrap();
        assert_eq!(single, StepAnswer::Single("Low".into()));
        assert_eq!(multi.display(), "a, b");
    }

    #[test]
    fn test_empty_answers_are_unanswered() {
        assert!(!StepAnswer::Single(String::new()).is_answered());
        assert!(!StepAnswer::Multiple(vec![]).is_answered());
        assert!(StepAnswer::Multiple(vec!["x".into()]).is_answered());
    }

    #[test]
    fn test_blank_framework_uses_input_type_specific_empties() {
        let c2 = C2Data::default();
        assert_eq!(c2.decision_framework[4].answer, StepAnswer::Multiple(vec![]));
        assert_eq!(c2.decision_framework[0].answer, StepAnswer::Single(String::new()));
        assert_eq!(c2.answered_steps().count(), 0);
    }
}
