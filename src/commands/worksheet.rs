//! Views over the whole worksheet: progress, risk matrix and bias inventory.

use anyhow::Result;
use serde::Serialize;

use crate::bias::{get_adaptive_weights, recommended_metrics, RecommendedMetric};
use crate::cli::OutputFormat;
use crate::formatting::colored_classification;
use crate::model::{AuditState, BiasSource, Component, RiskClassification, RiskMatrixEntry};
use crate::output::{format_bias_inventory, format_progress, format_recommended_metrics, format_risk_matrix, to_json};
use crate::progress::{component_progress, ComponentProgress};
use crate::risk::{highest_classification, sort_risk_matrix};

#[derive(Debug, Serialize)]
struct ProgressReport {
    component: Component,
    #[serde(flatten)]
    progress: ComponentProgress,
}

pub fn handle_progress(state: &AuditState, only: Option<Component>, format: OutputFormat) -> Result<String> {
    let components: Vec<Component> = match only {
        Some(component) => vec![component],
        None => Component::ALL.to_vec(),
    };
    let progress: Vec<(Component, ComponentProgress)> = components
        .into_iter()
        .map(|c| (c, component_progress(state, c)))
        .collect();

    match format {
        OutputFormat::Text => Ok(format_progress(&progress)),
        OutputFormat::Json => {
            let report: Vec<ProgressReport> = progress
                .into_iter()
                .map(|(component, progress)| ProgressReport { component, progress })
                .collect();
            Ok(to_json(&report)?)
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MatrixReport<'a> {
    primary_definition: &'a str,
    overall_risk_level: RiskClassification,
    risk_matrix: Vec<RiskMatrixEntry>,
    bias_sources: &'a [BiasSource],
    #[serde(skip_serializing_if = "Option::is_none")]
    recommended_metrics: Option<Vec<RecommendedMetric>>,
}

pub fn handle_matrix(state: &AuditState, recommend: bool, format: OutputFormat) -> Result<String> {
    let definition = state.primary_definition();
    let sources = &state.c3.bias_sources;
    let metrics = recommend.then(|| recommended_metrics(sources));
    let overall = highest_classification(&state.c1.risk_matrix);

    match format {
        OutputFormat::Json => Ok(to_json(&MatrixReport {
            primary_definition: definition,
            overall_risk_level: overall,
            risk_matrix: sort_risk_matrix(&state.c1.risk_matrix),
            bias_sources: sources,
            recommended_metrics: metrics,
        })?),
        OutputFormat::Text => {
            let mut out = format!("Overall risk level: {}\n\n", colored_classification(overall));
            out.push_str(&format_risk_matrix(&state.c1.risk_matrix));
            out.push('\n');
            out.push_str(&format_bias_inventory(sources, &get_adaptive_weights(definition)));
            if let Some(metrics) = metrics {
                out.push('\n');
                out.push_str(&format_recommended_metrics(&metrics));
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::learn_state;

    #[test]
    fn test_single_component_progress() {
        let json = handle_progress(&learn_state(), Some(Component::C2), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let report = value.as_array().unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0]["component"], "c2");
    }

    #[test]
    fn test_blank_audit_progress_lists_every_component() {
        colored::control::set_override(false);
        let text = handle_progress(&AuditState::new_audit(), None, OutputFormat::Text).unwrap();
        for component in Component::ALL {
            assert!(text.contains(&format!("Component {}: {}", component.number(), component.title())));
        }
    }

    #[test]
    fn test_matrix_json_sorted_by_score() {
        let json = handle_matrix(&learn_state(), true, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let scores: Vec<f64> = value["riskMatrix"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["score"].as_f64().unwrap())
            .collect();
        assert_eq!(scores.first(), Some(&125.0));
        assert_eq!(value["overallRiskLevel"], "Critical");
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(value["biasSources"].as_array().unwrap().len(), 7);
        assert!(!value["recommendedMetrics"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_matrix_without_recommendations_omits_them() {
        let json = handle_matrix(&learn_state(), false, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("recommendedMetrics").is_none());
    }

    #[test]
    fn test_matrix_text_leads_with_overall_level() {
        colored::control::set_override(false);
        let text = handle_matrix(&AuditState::new_audit(), false, OutputFormat::Text).unwrap();
        assert!(text.starts_with("Overall risk level: Low\n"));

        let mut state = AuditState::new_audit();
        state
            .c1
            .risk_matrix
            .push(crate::risk::create_risk_entry("R1", "Opaque letters", 3.0, 4.0, 4.0));
        let text = handle_matrix(&state, false, OutputFormat::Text).unwrap();
        assert!(text.starts_with("Overall risk level: Elevated\n"));
    }
}
