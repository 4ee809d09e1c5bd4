use anyhow::Result;
use clap::ValueEnum;

use crate::cli::OutputFormat;
use crate::common::{single_line, to_fixed};
use crate::context::build_progressive_context;
use crate::llm::prompts::{
    c1_risk_matrix_review, c2_selection_review, c3_inventory_review, c4_metrics_recommendation,
};
use crate::llm::PromptPair;
use crate::model::{AuditState, Component};
use crate::output::to_json;
use crate::risk::sort_risk_matrix;

/// Review prompts that can be filled from a saved worksheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PromptKind {
    /// Component 1 risk matrix review
    RiskMatrix,
    /// Component 2 definition selection review
    Selection,
    /// Component 3 bias inventory review
    Inventory,
    /// Component 4 metric recommendations
    Metrics,
}

fn risk_matrix_text(state: &AuditState) -> String {
    sort_risk_matrix(&state.c1.risk_matrix)
        .iter()
        .map(|r| {
            format!(
                "{}: {} (S{} x L{} x R{} = {}, {})",
                r.id,
                single_line(&r.risk),
                r.severity,
                r.likelihood,
                r.relevance,
                r.score,
                r.classification
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn selection_text(state: &AuditState) -> String {
    let c2 = &state.c2;
    format!(
        "Primary: {}\nJustification: {}\nSecondary: {}\nJustification: {}\nTrade-off: {}: {}",
        c2.primary_selection.definition,
        single_line(&c2.primary_selection.justification),
        c2.secondary_selection.definition,
        single_line(&c2.secondary_selection.justification),
        c2.tradeoff.title,
        single_line(&c2.tradeoff.resolution)
    )
}

fn inventory_text(state: &AuditState) -> String {
    state
        .c3
        .bias_sources
        .iter()
        .map(|s| {
            format!(
                "{}: {} ({}) - {}",
                s.bias_type,
                to_fixed(s.weighted_score, 1),
                s.priority,
                single_line(&s.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn context_for(state: &AuditState, component: Component) -> String {
    build_progressive_context(state, component).render()
}

pub fn build_prompt(state: &AuditState, kind: PromptKind) -> PromptPair {
    match kind {
        PromptKind::RiskMatrix => c1_risk_matrix_review(&risk_matrix_text(state)),
        PromptKind::Selection => {
            c2_selection_review(&context_for(state, Component::C2), &selection_text(state))
        }
        PromptKind::Inventory => {
            c3_inventory_review(&context_for(state, Component::C3), &inventory_text(state))
        }
        PromptKind::Metrics => c4_metrics_recommendation(&context_for(state, Component::C4)),
    }
}

pub fn handle_prompt(state: &AuditState, kind: PromptKind, format: OutputFormat) -> Result<String> {
    let _span = tracing::info_span!("prompt", kind = ?kind).entered();
    let prompt = build_prompt(state, kind);
    match format {
        OutputFormat::Json => Ok(to_json(&prompt)?),
        OutputFormat::Text => Ok(format!(
            "--- system ---\n{}\n\n--- user ---\n{}\n",
            prompt.system, prompt.user
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::learn_state;
    use crate::llm::METHODOLOGY_CONTEXT;

    #[test]
    fn test_risk_matrix_prompt_lists_highest_first() {
        let prompt = build_prompt(&learn_state(), PromptKind::RiskMatrix);
        assert!(prompt.system.starts_with(METHODOLOGY_CONTEXT));
        let first = prompt.user.lines().find(|l| l.starts_with('R')).unwrap();
        assert!(first.contains("= 125, Critical"));
    }

    #[test]
    fn test_metrics_prompt_carries_upstream_context() {
        let prompt = build_prompt(&learn_state(), PromptKind::Metrics);
        assert!(prompt.user.contains("=== Component 3: Bias Sources ==="));
    }

    #[test]
    fn test_json_prompt_has_both_parts() {
        let json = handle_prompt(&learn_state(), PromptKind::Inventory, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["system"].is_string());
        assert!(value["user"].as_str().unwrap().contains("Historical"));
    }
}
