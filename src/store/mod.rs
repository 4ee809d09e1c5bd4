//! The audit state store.
//!
//! [`AuditStore`] owns one [`AuditState`] and is the only code that mutates
//! it. Every change goes through [`AuditStore::dispatch`], which keeps the
//! derived fields fresh: a risk's score and classification are recomputed
//! whenever one of its ratings changes, and bias weighted scores and
//! priorities are recomputed whenever a source's dimensions or the primary
//! fairness definition change.

pub mod commands;
pub mod file_store;

pub use commands::{AuditCommand, BiasSourcePatch, C4TextField, RiskPatch};
pub use file_store::FileStore;

use crate::bias::{get_adaptive_weights, rescore_source, rescore_sources, BiasPriorityThresholds};
use crate::data::learn_state;
use crate::error::{AuditError, Result};
use crate::model::{AuditMode, AuditState};
use crate::risk::{blank_risk_entry, rescore_entry, risk_from_template, RiskThresholds, RISK_TEMPLATES};

#[derive(Debug, Clone)]
pub struct AuditStore {
    state: AuditState,
    risk_thresholds: RiskThresholds,
    bias_thresholds: BiasPriorityThresholds,
}

fn item_mut<'a, T>(items: &'a mut [T], collection: &'static str, index: usize) -> Result<&'a mut T> {
    let len = items.len();
    items
        .get_mut(index)
        .ok_or_else(|| AuditError::index_out_of_range(collection, index, len))
}

fn remove_item<T>(items: &mut Vec<T>, collection: &'static str, index: usize) -> Result<T> {
    if index < items.len() {
        Ok(items.remove(index))
    } else {
        Err(AuditError::index_out_of_range(collection, index, items.len()))
    }
}

impl AuditStore {
    /// Take ownership of `state`, refreshing every derived field.
    pub fn new(state: AuditState) -> Self {
        let mut store = Self {
            state,
            risk_thresholds: RiskThresholds::default(),
            bias_thresholds: BiasPriorityThresholds::default(),
        };
        store.refresh_derived();
        store
    }

    /// The read-only case study.
    pub fn learn() -> Self {
        Self::new(learn_state())
    }

    /// A blank worksheet, ready for editing.
    pub fn new_audit() -> Self {
        let mut state = AuditState::new_audit();
        state.mode = AuditMode::Audit;
        Self::new(state)
    }

    /// Use configured classification bands from now on.
    pub fn with_thresholds(mut self, risk: RiskThresholds, bias: BiasPriorityThresholds) -> Self {
        self.risk_thresholds = risk;
        self.bias_thresholds = bias;
        self.refresh_derived();
        self
    }

    pub fn state(&self) -> &AuditState {
        &self.state
    }

    /// Owned copy of the current worksheet, for export.
    pub fn snapshot(&self) -> AuditState {
        self.state.clone()
    }

    pub fn into_state(self) -> AuditState {
        self.state
    }

    pub fn is_read_only(&self) -> bool {
        self.state.mode == AuditMode::Learn
    }

    /// Apply a command at the current time.
    pub fn dispatch(&mut self, command: AuditCommand) -> Result<()> {
        self.dispatch_at(command, chrono::Utc::now().timestamp_millis())
    }

    /// Apply a command with `now` (epoch milliseconds) as the edit time. A
    /// failed command leaves the state untouched.
    pub fn dispatch_at(&mut self, command: AuditCommand, now: i64) -> Result<()> {
        if command.is_edit() && self.is_read_only() {
            return Err(AuditError::ReadOnly);
        }
        log::debug!("Applying store command {}", command.name());

        let touches = command.is_edit() || matches!(command, AuditCommand::AddLlmAnalysis(_));
        self.apply(command, now)?;
        if touches {
            self.state.metadata.updated_at = now;
        }
        Ok(())
    }

    fn apply(&mut self, command: AuditCommand, now: i64) -> Result<()> {
        let state = &mut self.state;
        match command {
            AuditCommand::SetMode(mode) => state.mode = mode,
            AuditCommand::SetActiveComponent(component) => state.active_component = component,
            AuditCommand::SetComponentStatus { component, status } => {
                state.component_status.insert(component.key().to_string(), status);
            }
            AuditCommand::UpdateSystem(system) => state.system = system,

            AuditCommand::UpdateDomainContext(v) => state.c1.domain_context = v,
            AuditCommand::UpdateDataRepresentation(v) => state.c1.data_representation = v,
            AuditCommand::UpdateTechnologyTransition(v) => state.c1.technology_transition = v,
            AuditCommand::AddProtectedGroup(group) => state.c1.protected_groups.push(group),
            AuditCommand::UpdateProtectedGroup { index, group } => {
                *item_mut(&mut state.c1.protected_groups, "protected groups", index)? = group;
            }
            AuditCommand::RemoveProtectedGroup(index) => {
                remove_item(&mut state.c1.protected_groups, "protected groups", index)?;
            }
            AuditCommand::AddIntersection(ix) => state.c1.intersections.push(ix),
            AuditCommand::UpdateIntersection { index, intersection } => {
                *item_mut(&mut state.c1.intersections, "intersections", index)? = intersection;
            }
            AuditCommand::RemoveIntersection(index) => {
                remove_item(&mut state.c1.intersections, "intersections", index)?;
            }
            AuditCommand::AddFeedbackLoop(fl) => state.c1.feedback_loops.push(fl),
            AuditCommand::UpdateFeedbackLoop { index, feedback_loop } => {
                *item_mut(&mut state.c1.feedback_loops, "feedback loops", index)? = feedback_loop;
            }
            AuditCommand::RemoveFeedbackLoop(index) => {
                remove_item(&mut state.c1.feedback_loops, "feedback loops", index)?;
            }

            AuditCommand::AddRisk(mut entry) => {
                rescore_entry(&mut entry, &self.risk_thresholds);
                state.c1.risk_matrix.push(entry);
            }
            AuditCommand::AddBlankRisk => {
                let id = format!("R{}", state.c1.risk_matrix.len() + 1);
                let mut entry = blank_risk_entry(id);
                rescore_entry(&mut entry, &self.risk_thresholds);
                state.c1.risk_matrix.push(entry);
            }
            AuditCommand::AddRiskFromTemplate(template) => {
                let Some(t) = RISK_TEMPLATES.get(template) else {
                    return Err(AuditError::index_out_of_range(
                        "risk templates",
                        template,
                        RISK_TEMPLATES.len(),
                    ));
                };
                let id = format!("R{}", state.c1.risk_matrix.len() + 1);
                let mut entry = risk_from_template(id, t);
                rescore_entry(&mut entry, &self.risk_thresholds);
                state.c1.risk_matrix.push(entry);
            }
            AuditCommand::UpdateRisk { index, patch } => {
                let entry = item_mut(&mut state.c1.risk_matrix, "risk matrix", index)?;
                if let Some(risk) = patch.risk {
                    entry.risk = risk;
                }
                if let Some(v) = patch.severity {
                    entry.severity = v;
                }
                if let Some(v) = patch.likelihood {
                    entry.likelihood = v;
                }
                if let Some(v) = patch.relevance {
                    entry.relevance = v;
                }
                rescore_entry(entry, &self.risk_thresholds);
            }
            AuditCommand::RemoveRisk(index) => {
                remove_item(&mut state.c1.risk_matrix, "risk matrix", index)?;
            }
            AuditCommand::SetRiskMatrix(mut matrix) => {
                for entry in &mut matrix {
                    rescore_entry(entry, &self.risk_thresholds);
                }
                state.c1.risk_matrix = matrix;
            }

            AuditCommand::AnswerDecisionStep {
                index,
                answer,
                explanation,
            } => {
                let step = item_mut(&mut state.c2.decision_framework, "decision steps", index)?;
                step.answer = answer;
                if let Some(explanation) = explanation {
                    step.explanation = explanation;
                }
            }
            AuditCommand::UpdatePrimarySelection(selection) => {
                let changed = selection.definition != state.c2.primary_selection.definition;
                state.c2.primary_selection = selection;
                if changed {
                    rescore_sources(
                        &mut state.c3.bias_sources,
                        &state.c2.primary_selection.definition,
                        &self.bias_thresholds,
                    );
                }
            }
            AuditCommand::UpdateSecondarySelection(selection) => {
                state.c2.secondary_selection = selection
            }
            AuditCommand::UpdateTradeoff(tradeoff) => state.c2.tradeoff = tradeoff,

            AuditCommand::UpdateBiasSource { index, patch } => {
                let weights = get_adaptive_weights(&state.c2.primary_selection.definition).weights;
                let source = item_mut(&mut state.c3.bias_sources, "bias sources", index)?;
                if let Some(v) = patch.description {
                    source.description = v;
                }
                if let Some(v) = patch.indicators {
                    source.indicators = v;
                }
                if let Some(v) = patch.indicator_checks {
                    source.indicator_checks = v;
                }
                if let Some(v) = patch.evidence {
                    source.evidence = v;
                }
                if let Some(v) = patch.severity_score {
                    source.severity_score = v;
                }
                if let Some(v) = patch.dimensions {
                    source.dimensions = v;
                }
                if let Some(v) = patch.accountable_party {
                    source.accountable_party = Some(v);
                }
                rescore_source(source, &weights, &self.bias_thresholds);
            }

            AuditCommand::SetC4Text { field, value } => *field.slot(&mut state.c4) = value,
            AuditCommand::UpdateMetricSummary(v) => state.c4.metric_summary = v,
            AuditCommand::UpdateStatisticalValidation(v) => state.c4.statistical_validation = v,
            AuditCommand::SetRecommendations(v) => state.c4.recommendations = v,
            AuditCommand::SetAuditDimensions(v) => state.c4.audit_dimensions = v,

            AuditCommand::AddLlmAnalysis(analysis) => state.llm_analyses.push(analysis),
            AuditCommand::UpdateExecutiveSummary(v) => state.executive_summary = v,
            AuditCommand::UpdateLimitations(v) => state.limitations = v,
            AuditCommand::UpdateAuditor {
                name,
                auditor_name,
                auditor_role,
                auditor_organization,
            } => {
                let metadata = &mut state.metadata;
                if let Some(v) = name {
                    metadata.name = v;
                }
                if auditor_name.is_some() {
                    metadata.auditor_name = auditor_name;
                }
                if auditor_role.is_some() {
                    metadata.auditor_role = auditor_role;
                }
                if auditor_organization.is_some() {
                    metadata.auditor_organization = auditor_organization;
                }
            }
            AuditCommand::SignOff { statement } => {
                state.metadata.signoff_statement = Some(statement);
                state.metadata.signed_off_at = Some(now);
            }

            AuditCommand::Reset => {
                *state = AuditState::new_audit();
            }
            AuditCommand::Load(loaded) => {
                *state = *loaded;
                self.refresh_derived();
            }
        }
        Ok(())
    }

    /// Recompute every risk score and bias score from its ratings.
    fn refresh_derived(&mut self) {
        for entry in &mut self.state.c1.risk_matrix {
            rescore_entry(entry, &self.risk_thresholds);
        }
        rescore_sources(
            &mut self.state.c3.bias_sources,
            &self.state.c2.primary_selection.definition,
            &self.bias_thresholds,
        );
    }
}

impl Default for AuditStore {
    fn default() -> Self {
        Self::new_audit()
    }
}
