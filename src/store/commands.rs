//! Commands accepted by [`super::AuditStore::dispatch`].
//!
//! Each variant is one user intent against the worksheet. Collection edits
//! address entries by index; replacing a sub-object takes the whole new value,
//! and the patch types below cover the entries whose derived fields must be
//! recomputed on every edit.

use crate::model::*;
use serde::{Deserialize, Serialize};

/// Partial edit of a risk matrix entry. Score and classification are never
/// set directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskPatch {
    pub risk: Option<String>,
    pub severity: Option<f64>,
    pub likelihood: Option<f64>,
    pub relevance: Option<f64>,
}

/// Partial edit of a bias source. Weighted score and priority are never set
/// directly, and the bias type is fixed by position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BiasSourcePatch {
    pub description: Option<String>,
    pub indicators: Option<Vec<String>>,
    pub indicator_checks: Option<Vec<bool>>,
    pub evidence: Option<String>,
    pub severity_score: Option<f64>,
    pub dimensions: Option<BiasDimensions>,
    pub accountable_party: Option<AccountableParty>,
}

/// Free-text analysis fields of Component 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum C4TextField {
    GroupOutcomeRates,
    ErrorRateAnalysis,
    IntersectionalAnalysis,
    ThresholdAnalysis,
    ValidationBootstrap,
    ValidationPermutation,
    ValidationEffectSize,
    ValidationBayesian,
    PreDeploymentRecs,
    PostDeploymentRecs,
    AuditDimensionScores,
}

impl C4TextField {
    pub(super) fn slot(self, c4: &mut C4Data) -> &mut String {
        match self {
            C4TextField::GroupOutcomeRates => &mut c4.group_outcome_rates,
            C4TextField::ErrorRateAnalysis => &mut c4.error_rate_analysis,
            C4TextField::IntersectionalAnalysis => &mut c4.intersectional_analysis,
            C4TextField::ThresholdAnalysis => &mut c4.threshold_analysis,
            C4TextField::ValidationBootstrap => &mut c4.validation_bootstrap,
            C4TextField::ValidationPermutation => &mut c4.validation_permutation,
            C4TextField::ValidationEffectSize => &mut c4.validation_effect_size,
            C4TextField::ValidationBayesian => &mut c4.validation_bayesian,
            C4TextField::PreDeploymentRecs => &mut c4.pre_deployment_recs,
            C4TextField::PostDeploymentRecs => &mut c4.post_deployment_recs,
            C4TextField::AuditDimensionScores => &mut c4.audit_dimension_scores,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuditCommand {
    /// Switch between the case study view and the editable worksheet.
    SetMode(AuditMode),

    /// Record which page is open.
    SetActiveComponent(String),

    SetComponentStatus {
        component: Component,
        status: ComponentStatus,
    },

    UpdateSystem(SystemDescription),

    // Component 1
    UpdateDomainContext(DomainContext),
    UpdateDataRepresentation(DataRepresentation),
    UpdateTechnologyTransition(TechnologyTransition),
    AddProtectedGroup(ProtectedGroup),
    UpdateProtectedGroup { index: usize, group: ProtectedGroup },
    RemoveProtectedGroup(usize),
    AddIntersection(Intersection),
    UpdateIntersection { index: usize, intersection: Intersection },
    RemoveIntersection(usize),
    AddFeedbackLoop(FeedbackLoop),
    UpdateFeedbackLoop { index: usize, feedback_loop: FeedbackLoop },
    RemoveFeedbackLoop(usize),

    /// Append a risk; its score and classification are recomputed.
    AddRisk(RiskMatrixEntry),

    /// Append a blank risk (all ratings 1) with a generated id.
    AddBlankRisk,

    /// Append one of the starter risks by template index.
    AddRiskFromTemplate(usize),

    UpdateRisk { index: usize, patch: RiskPatch },
    RemoveRisk(usize),

    /// Replace the whole matrix; every entry is rescored.
    SetRiskMatrix(Vec<RiskMatrixEntry>),

    // Component 2
    AnswerDecisionStep {
        index: usize,
        answer: StepAnswer,
        explanation: Option<String>,
    },

    /// Changing the definition rescores every bias source.
    UpdatePrimarySelection(DefinitionSelection),

    UpdateSecondarySelection(DefinitionSelection),
    UpdateTradeoff(TradeoffDoc),

    // Component 3
    UpdateBiasSource { index: usize, patch: BiasSourcePatch },

    // Component 4
    SetC4Text { field: C4TextField, value: String },
    UpdateMetricSummary(MetricSummary),
    UpdateStatisticalValidation(StatisticalValidation),
    SetRecommendations(Vec<Recommendation>),
    SetAuditDimensions(Vec<AuditDimension>),

    AddLlmAnalysis(LlmAnalysis),

    UpdateExecutiveSummary(ExecutiveSummary),
    UpdateLimitations(AuditLimitations),

    /// Set the audit name and auditor details; `None` leaves a field as is.
    UpdateAuditor {
        name: Option<String>,
        auditor_name: Option<String>,
        auditor_role: Option<String>,
        auditor_organization: Option<String>,
    },

    /// Sign the audit off with a statement, stamped with the dispatch time.
    SignOff { statement: String },

    /// Replace the worksheet with a blank audit.
    Reset,

    /// Replace the worksheet with an imported one.
    Load(Box<AuditState>),
}

impl AuditCommand {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            AuditCommand::SetMode(_) => "set-mode",
            AuditCommand::SetActiveComponent(_) => "set-active-component",
            AuditCommand::SetComponentStatus { .. } => "set-component-status",
            AuditCommand::UpdateSystem(_) => "update-system",
            AuditCommand::UpdateDomainContext(_) => "update-domain-context",
            AuditCommand::UpdateDataRepresentation(_) => "update-data-representation",
            AuditCommand::UpdateTechnologyTransition(_) => "update-technology-transition",
            AuditCommand::AddProtectedGroup(_) => "add-protected-group",
            AuditCommand::UpdateProtectedGroup { .. } => "update-protected-group",
            AuditCommand::RemoveProtectedGroup(_) => "remove-protected-group",
            AuditCommand::AddIntersection(_) => "add-intersection",
            AuditCommand::UpdateIntersection { .. } => "update-intersection",
            AuditCommand::RemoveIntersection(_) => "remove-intersection",
            AuditCommand::AddFeedbackLoop(_) => "add-feedback-loop",
            AuditCommand::UpdateFeedbackLoop { .. } => "update-feedback-loop",
            AuditCommand::RemoveFeedbackLoop(_) => "remove-feedback-loop",
            AuditCommand::AddRisk(_) => "add-risk",
            AuditCommand::AddBlankRisk => "add-blank-risk",
            AuditCommand::AddRiskFromTemplate(_) => "add-risk-from-template",
            AuditCommand::UpdateRisk { .. } => "update-risk",
            AuditCommand::RemoveRisk(_) => "remove-risk",
            AuditCommand::SetRiskMatrix(_) => "set-risk-matrix",
            AuditCommand::AnswerDecisionStep { .. } => "answer-decision-step",
            AuditCommand::UpdatePrimarySelection(_) => "update-primary-selection",
            AuditCommand::UpdateSecondarySelection(_) => "update-secondary-selection",
            AuditCommand::UpdateTradeoff(_) => "update-tradeoff",
            AuditCommand::UpdateBiasSource { .. } => "update-bias-source",
            AuditCommand::SetC4Text { .. } => "set-c4-text",
            AuditCommand::UpdateMetricSummary(_) => "update-metric-summary",
            AuditCommand::UpdateStatisticalValidation(_) => "update-statistical-validation",
            AuditCommand::SetRecommendations(_) => "set-recommendations",
            AuditCommand::SetAuditDimensions(_) => "set-audit-dimensions",
            AuditCommand::AddLlmAnalysis(_) => "add-llm-analysis",
            AuditCommand::UpdateExecutiveSummary(_) => "update-executive-summary",
            AuditCommand::UpdateLimitations(_) => "update-limitations",
            AuditCommand::UpdateAuditor { .. } => "update-auditor",
            AuditCommand::SignOff { .. } => "sign-off",
            AuditCommand::Reset => "reset",
            AuditCommand::Load(_) => "load",
        }
    }

    /// Whether the command edits worksheet content. Content edits are
    /// refused in learn mode and bump `updatedAt`.
    pub fn is_edit(&self) -> bool {
        !matches!(
            self,
            AuditCommand::SetMode(_)
                | AuditCommand::SetActiveComponent(_)
                | AuditCommand::SetComponentStatus { .. }
                | AuditCommand::AddLlmAnalysis(_)
                | AuditCommand::Reset
                | AuditCommand::Load(_)
        )
    }
}
