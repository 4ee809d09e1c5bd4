//! Component 1: historical context.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum RiskClassification {
    #[default]
    Low,
    Moderate,
    Elevated,
    Critical,
}

impl RiskClassification {
    pub const ALL: [RiskClassification; 4] = [
        RiskClassification::Critical,
        RiskClassification::Elevated,
        RiskClassification::Moderate,
        RiskClassification::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskClassification::Critical => "Critical",
            RiskClassification::Elevated => "Elevated",
            RiskClassification::Moderate => "Moderate",
            RiskClassification::Low => "Low",
        }
    }
}

impl fmt::Display for RiskClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ImpactLevel {
    Strong,
    #[default]
    Moderate,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimelineEventType {
    Cultural,
    #[default]
    Policy,
    System,
    Legal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub year: String,
    pub event: String,
    #[serde(rename = "type")]
    pub kind: TimelineEventType,
}

/// A scored risk statement. `score` and `classification` are derived from the
/// three ratings and must be refreshed together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMatrixEntry {
    pub id: String,
    pub risk: String,
    pub severity: f64,
    pub likelihood: f64,
    pub relevance: f64,
    pub score: f64,
    pub classification: RiskClassification,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProtectedGroup {
    pub group: String,
    pub pattern: String,
    pub data_pathway: String,
    pub impact: ImpactLevel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Intersection {
    pub groups: String,
    pub priority: u32,
    pub pattern: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackLoop {
    pub id: String,
    pub trigger: String,
    pub mechanism: String,
    pub amplification: String,
    pub monitoring: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DomainContext {
    pub system: String,
    pub decision_type: String,
    pub affected_population: String,
    pub historical_patterns: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataRepresentation {
    pub data_sources: String,
    pub coverage_gaps: String,
    pub label_reliability: String,
    pub data_source_checklist: BTreeMap<String, bool>,
}

impl Default for DataRepresentation {
    fn default() -> Self {
        let data_source_checklist = [
            "missingGroups",
            "temporalGaps",
            "labelBias",
            "proxyVars",
            "coverageGaps",
        ]
        .into_iter()
        .map(|k| (k.to_string(), false))
        .collect();

        Self {
            data_sources: String::new(),
            coverage_gaps: String::new(),
            label_reliability: String::new(),
            data_source_checklist,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TechnologyTransition {
    pub prior_process: String,
    pub what_changed: String,
    pub oversight_lost: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct C1Data {
    pub domain_context: DomainContext,
    pub data_representation: DataRepresentation,
    pub technology_transition: TechnologyTransition,
    pub protected_groups: Vec<ProtectedGroup>,
    pub intersections: Vec<Intersection>,
    pub feedback_loops: Vec<FeedbackLoop>,
    pub risk_matrix: Vec<RiskMatrixEntry>,
    pub timeline: Vec<TimelineEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_ordering_matches_severity() {
        assert!(RiskClassification::Critical > RiskClassification::Elevated);
        assert!(RiskClassification::Elevated > RiskClassification::Moderate);
        assert!(RiskClassification::Moderate > RiskClassification::Low);
    }

    #[test]
    fn test_timeline_event_uses_type_key() {
        let json = r#"{"year":"2015","event":"OCI launched","type":"system"}"#;
        let event: TimelineEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, TimelineEventType::System);
    }

    #[test]
    fn test_partial_c1_fills_defaults() {
        let c1: C1Data = serde_json::from_str(r#"{"domainContext":{"system":"OCI"}}"#).unwrap();
        assert_eq!(c1.domain_context.system, "OCI");
        assert!(c1.risk_matrix.is_empty());
        assert_eq!(c1.data_representation.data_source_checklist.len(), 5);
    }
}
