//! Completion checklists for each audit component.
//!
//! Every component has a fixed list of items; an item is complete when the
//! worksheet fields it looks at are filled in. Text fields count as filled
//! when they contain anything other than whitespace.

use crate::common::{is_non_blank, round_half_up};
use crate::model::{AuditState, Component};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressItem {
    pub label: &'static str,
    pub complete: bool,
}

impl ProgressItem {
    fn new(label: &'static str, complete: bool) -> Self {
        Self { label, complete }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentProgress {
    pub completed: usize,
    pub total: usize,
    /// Whole percent, halves rounded up; 0 when there are no items
    pub percent: u8,
    pub items: Vec<ProgressItem>,
}

impl ComponentProgress {
    fn from_items(items: Vec<ProgressItem>) -> Self {
        let completed = items.iter().filter(|i| i.complete).count();
        let total = items.len();
        let percent = if total > 0 {
            round_half_up(completed as f64 / total as f64 * 100.0, 0) as u8
        } else {
            0
        };
        Self {
            completed,
            total,
            percent,
            items,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

fn c1_items(state: &AuditState) -> Vec<ProgressItem> {
    let c1 = &state.c1;
    vec![
        ProgressItem::new(
            "Domain context",
            is_non_blank(&c1.domain_context.system) && is_non_blank(&c1.domain_context.decision_type),
        ),
        ProgressItem::new(
            "Data representation",
            is_non_blank(&c1.data_representation.data_sources)
                || is_non_blank(&c1.data_representation.label_reliability),
        ),
        ProgressItem::new(
            "Technology transition",
            is_non_blank(&c1.technology_transition.prior_process),
        ),
        ProgressItem::new("Protected groups", !c1.protected_groups.is_empty()),
        ProgressItem::new("Intersectional analysis", !c1.intersections.is_empty()),
        ProgressItem::new("Feedback loops", !c1.feedback_loops.is_empty()),
    ]
}

fn c2_items(state: &AuditState) -> Vec<ProgressItem> {
    let c2 = &state.c2;
    let answered = c2.answered_steps().count();
    vec![
        ProgressItem::new("Framework steps answered", answered >= 3),
        ProgressItem::new("All 7 steps complete", answered == 7),
        ProgressItem::new(
            "Primary definition selected",
            is_non_blank(&c2.primary_selection.definition),
        ),
        ProgressItem::new("Trade-off documented", is_non_blank(&c2.tradeoff.description)),
    ]
}

fn c3_items(state: &AuditState) -> Vec<ProgressItem> {
    let scored = state.c3.bias_sources.iter().filter(|s| s.is_scored()).count();
    vec![
        ProgressItem::new("At least 1 bias source scored", scored >= 1),
        ProgressItem::new("3+ bias sources scored", scored >= 3),
        ProgressItem::new("5+ bias sources scored", scored >= 5),
        ProgressItem::new("All 7 bias sources scored", scored == 7),
    ]
}

fn c4_items(state: &AuditState) -> Vec<ProgressItem> {
    let c4 = &state.c4;
    vec![
        ProgressItem::new(
            "Metric summary",
            is_non_blank(&c4.metric_summary.highest_group_rate)
                || is_non_blank(&c4.metric_summary.worst_spd),
        ),
        ProgressItem::new("Group outcome rates", is_non_blank(&c4.group_outcome_rates)),
        ProgressItem::new("Error rate analysis", is_non_blank(&c4.error_rate_analysis)),
        ProgressItem::new("Intersectional analysis", is_non_blank(&c4.intersectional_analysis)),
        ProgressItem::new(
            "Recommendations",
            is_non_blank(&c4.pre_deployment_recs) || is_non_blank(&c4.post_deployment_recs),
        ),
        ProgressItem::new("Audit dimension scores", is_non_blank(&c4.audit_dimension_scores)),
    ]
}

pub fn component_progress(state: &AuditState, component: Component) -> ComponentProgress {
    let items = match component {
        Component::C1 => c1_items(state),
        Component::C2 => c2_items(state),
        Component::C3 => c3_items(state),
        Component::C4 => c4_items(state),
    };
    ComponentProgress::from_items(items)
}
