//! Audit worksheet data model.
//!
//! Every type here mirrors the JSON shape of an exported audit (camelCase
//! field names), so an [`AuditState`] round-trips through
//! [`crate::io::export_audit_json`] and [`crate::io::parse_audit_json`]
//! unchanged. Component blocks default field-by-field, which lets a partially
//! filled export load the same way the worksheet would merge it with a blank
//! audit.

pub mod bias;
pub mod definitions;
pub mod historical;
pub mod metrics;

pub use bias::{
    AccountableParty, BiasDimensions, BiasPriority, BiasSource, BiasType, C3Data,
};
pub use definitions::{
    C2Data, DecisionStep, DecisionStepInputType, DefinitionSelection, FairnessDefinition,
    StepAnswer, TradeoffDoc,
};
pub use historical::{
    C1Data, DataRepresentation, DomainContext, FeedbackLoop, ImpactLevel, Intersection,
    ProtectedGroup, RiskClassification, RiskMatrixEntry, TechnologyTransition, TimelineEvent,
    TimelineEventType,
};
pub use metrics::{
    AuditDimension, C4Data, DebtNoticeRates, ErrorRateEntry, ErrorRates, GroupRate,
    IntersectionalRow, IntersectionalStatus, MetricSummary, Recommendation, RecommendationEffort,
    SpdComparison, StatisticalValidation, ThresholdPoint,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::AuditError;

/// Which dataset the worksheet is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuditMode {
    /// Read-only Robodebt case study
    #[default]
    Learn,
    /// User-editable worksheet
    Audit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentStatus {
    #[default]
    NotStarted,
    InProgress,
    Complete,
}

/// One of the four sequential audit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    C1,
    C2,
    C3,
    C4,
}

impl Component {
    pub const ALL: [Component; 4] = [Component::C1, Component::C2, Component::C3, Component::C4];

    pub fn number(self) -> u8 {
        match self {
            Component::C1 => 1,
            Component::C2 => 2,
            Component::C3 => 3,
            Component::C4 => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Component::C1 => "Historical Context",
            Component::C2 => "Fairness Definitions",
            Component::C3 => "Bias Sources",
            Component::C4 => "Fairness Metrics",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Component::C1 => "c1",
            Component::C2 => "c2",
            Component::C3 => "c3",
            Component::C4 => "c4",
        }
    }

    /// Components whose summaries feed this one, in order.
    pub fn upstream(self) -> &'static [Component] {
        match self {
            Component::C1 => &[],
            Component::C2 => &[Component::C1],
            Component::C3 => &[Component::C1, Component::C2],
            Component::C4 => &[Component::C1, Component::C2, Component::C3],
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Component {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c1" | "1" => Ok(Component::C1),
            "c2" | "2" => Ok(Component::C2),
            "c3" | "3" => Ok(Component::C3),
            "c4" | "4" => Ok(Component::C4),
            _ => Err(AuditError::UnknownComponent(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditMetadata {
    pub id: String,
    pub name: String,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
    pub updated_at: i64,
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auditor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auditor_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auditor_organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_off_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signoff_statement: Option<String>,
}

impl AuditMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            version: 1,
            auditor_name: None,
            auditor_role: None,
            auditor_organization: None,
            signed_off_at: None,
            signoff_statement: None,
        }
    }
}

/// Overview of the audited system.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemDescription {
    pub name: String,
    pub operator: String,
    pub period: String,
    pub scale: String,
    pub algorithm: String,
    pub decision: String,
    pub outcome: String,
}

/// A stored LLM response tied to a worksheet section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmAnalysis {
    pub id: String,
    pub component: String,
    pub section: String,
    pub timestamp: i64,
    pub provider: String,
    pub prompt: String,
    pub response: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeploymentReadiness {
    Go,
    Conditional,
    #[default]
    #[serde(rename = "No-Go")]
    NoGo,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecutiveSummary {
    pub overall_risk_level: RiskClassification,
    pub key_findings: Vec<String>,
    pub top_disparities: Vec<String>,
    pub primary_recommendation: String,
    pub deployment_readiness: DeploymentReadiness,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditLimitations {
    pub data_gaps: String,
    pub methodological_limitations: String,
    pub scope_exclusions: String,
    pub confidence_statement: String,
}

/// Aggregate root of an audit worksheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditState {
    pub metadata: AuditMetadata,
    pub mode: AuditMode,
    pub active_component: String,
    pub component_status: BTreeMap<String, ComponentStatus>,
    pub system: SystemDescription,
    pub c1: C1Data,
    pub c2: C2Data,
    pub c3: C3Data,
    pub c4: C4Data,
    #[serde(default)]
    pub executive_summary: ExecutiveSummary,
    #[serde(default)]
    pub limitations: AuditLimitations,
    pub llm_analyses: Vec<LlmAnalysis>,
}

impl AuditState {
    /// A blank worksheet: unanswered decision framework, unscored bias sources.
    pub fn new_audit() -> Self {
        let component_status = Component::ALL
            .iter()
            .map(|c| (c.key().to_string(), ComponentStatus::NotStarted))
            .collect();

        Self {
            metadata: AuditMetadata::new("New Audit"),
            mode: AuditMode::Learn,
            active_component: "overview".to_string(),
            component_status,
            system: SystemDescription::default(),
            c1: C1Data::default(),
            c2: C2Data::default(),
            c3: C3Data::default(),
            c4: C4Data::default(),
            executive_summary: ExecutiveSummary::default(),
            limitations: AuditLimitations::default(),
            llm_analyses: Vec::new(),
        }
    }

    /// Name of the primary fairness definition chosen in C2 (may be empty).
    pub fn primary_definition(&self) -> &str {
        &self.c2.primary_selection.definition
    }
}

impl Default for AuditState {
    fn default() -> Self {
        Self::new_audit()
    }
}
