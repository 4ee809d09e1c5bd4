//! Component 3: bias source inventory.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven bias categories. The set is closed and positional: an audit
/// always carries exactly one source per variant, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BiasType {
    Historical,
    Representation,
    Measurement,
    Aggregation,
    Learning,
    Evaluation,
    Deployment,
}

impl BiasType {
    pub const ALL: [BiasType; 7] = [
        BiasType::Historical,
        BiasType::Representation,
        BiasType::Measurement,
        BiasType::Aggregation,
        BiasType::Learning,
        BiasType::Evaluation,
        BiasType::Deployment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BiasType::Historical => "Historical",
            BiasType::Representation => "Representation",
            BiasType::Measurement => "Measurement",
            BiasType::Aggregation => "Aggregation",
            BiasType::Learning => "Learning",
            BiasType::Evaluation => "Evaluation",
            BiasType::Deployment => "Deployment",
        }
    }
}

impl fmt::Display for BiasType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum BiasPriority {
    #[default]
    Low,
    Medium,
    High,
}

impl BiasPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            BiasPriority::High => "High",
            BiasPriority::Medium => "Medium",
            BiasPriority::Low => "Low",
        }
    }
}

impl fmt::Display for BiasPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountableParty {
    #[serde(rename = "Data Team")]
    DataTeam,
    #[serde(rename = "Model Team")]
    ModelTeam,
    #[serde(rename = "Product Team")]
    ProductTeam,
    #[serde(rename = "Legal/Compliance")]
    LegalCompliance,
    Leadership,
    External,
}

/// Five rating dimensions, each expected in [1, 5].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasDimensions {
    pub severity: f64,
    pub scope: f64,
    pub persistence: f64,
    pub historical_alignment: f64,
    pub feasibility: f64,
}

impl BiasDimensions {
    pub const fn uniform(value: f64) -> Self {
        Self {
            severity: value,
            scope: value,
            persistence: value,
            historical_alignment: value,
            feasibility: value,
        }
    }
}

impl Default for BiasDimensions {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

/// One rated bias source. `weighted_score` and `priority` are derived from
/// `dimensions` under the active weight profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasSource {
    #[serde(rename = "type")]
    pub bias_type: BiasType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub indicators: Vec<String>,
    #[serde(default)]
    pub indicator_checks: Vec<bool>,
    #[serde(default)]
    pub evidence: String,
    #[serde(default = "default_severity_score")]
    pub severity_score: f64,
    #[serde(default)]
    pub dimensions: BiasDimensions,
    #[serde(default = "default_weighted_score")]
    pub weighted_score: f64,
    #[serde(default)]
    pub priority: BiasPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accountable_party: Option<AccountableParty>,
}

fn default_severity_score() -> f64 {
    1.0
}

fn default_weighted_score() -> f64 {
    1.0
}

impl BiasSource {
    /// Unscored source: all dimensions 1, score 1.0, Low.
    pub fn unscored(bias_type: BiasType) -> Self {
        Self {
            bias_type,
            description: String::new(),
            indicators: Vec::new(),
            indicator_checks: Vec::new(),
            evidence: String::new(),
            severity_score: default_severity_score(),
            dimensions: BiasDimensions::default(),
            weighted_score: default_weighted_score(),
            priority: BiasPriority::Low,
            accountable_party: None,
        }
    }

    /// Scored strictly above the unscored default.
    pub fn is_scored(&self) -> bool {
        self.weighted_score > 1.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct C3Data {
    pub bias_sources: Vec<BiasSource>,
}

impl Default for C3Data {
    fn default() -> Self {
        Self {
            bias_sources: BiasType::ALL.iter().map(|t| BiasSource::unscored(*t)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inventory_is_positional() {
        let c3 = C3Data::default();
        let types: Vec<_> = c3.bias_sources.iter().map(|s| s.bias_type).collect();
        assert_eq!(types, BiasType::ALL.to_vec());
        assert!(c3.bias_sources.iter().all(|s| !s.is_scored()));
    }

    #[test]
    fn test_accountable_party_wire_names() {
        assert_eq!(
            serde_json::to_string(&AccountableParty::LegalCompliance).unwrap(),
            "\"Legal/Compliance\""
        );
    }

    #[test]
    fn test_source_deserializes_type_key() {
        let json = r#"{"type":"Measurement","dimensions":{"severity":5,"scope":4,"persistence":3,"historicalAlignment":2,"feasibility":1}}"#;
        let source: BiasSource = serde_json::from_str(json).unwrap();
        assert_eq!(source.bias_type, BiasType::Measurement);
        assert_eq!(source.dimensions.historical_alignment, 2.0);
        assert_eq!(source.weighted_score, 1.0);
    }
}
