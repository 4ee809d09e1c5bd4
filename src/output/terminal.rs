//! Human-readable renderings for the terminal.
//!
//! Every function returns a `String`; colour codes are only emitted when the
//! `colored` override allows them (see [`crate::formatting::FormattingConfig::apply`]).

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::bias::{AdaptiveWeights, BiasWeights, RecommendedMetric, ADAPTIVE_WEIGHT_PROFILES};
use crate::common::to_fixed;
use crate::formatting::{colored_classification, colored_priority};
use crate::model::{BiasPriority, BiasSource, Component, RiskClassification, RiskMatrixEntry};
use crate::progress::ComponentProgress;
use crate::risk::{sort_risk_matrix, RiskDistribution, RiskThresholds};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn number_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

pub fn format_risk_score(score: f64, classification: RiskClassification, thresholds: &RiskThresholds) -> String {
    let mut out = format!(
        "{} {} ({})\n",
        "Risk score:".bold(),
        score,
        colored_classification(classification)
    );
    for line in thresholds.legend() {
        out.push_str(&format!("  {}\n", line.dimmed()));
    }
    out
}

pub fn format_bias_score(score: f64, priority: BiasPriority, adaptive: &AdaptiveWeights) -> String {
    format!(
        "{} {} ({})\n{}\n",
        "Weighted score:".bold(),
        to_fixed(score, 1),
        colored_priority(priority),
        adaptive.rationale.dimmed()
    )
}

/// Risks sorted by descending score, with the band counts below.
pub fn format_risk_matrix(matrix: &[RiskMatrixEntry]) -> String {
    if matrix.is_empty() {
        return "No risks recorded.\n".to_string();
    }

    let mut table = new_table(vec![
        "ID",
        "Risk",
        "Severity",
        "Likelihood",
        "Relevance",
        "Score",
        "Classification",
    ]);
    for entry in sort_risk_matrix(matrix) {
        table.add_row(vec![
            Cell::new(&entry.id),
            Cell::new(&entry.risk),
            number_cell(entry.severity.to_string()),
            number_cell(entry.likelihood.to_string()),
            number_cell(entry.relevance.to_string()),
            number_cell(entry.score.to_string()),
            Cell::new(colored_classification(entry.classification).to_string()),
        ]);
    }

    let distribution = RiskDistribution::from_entries(matrix);
    let counts: Vec<String> = RiskClassification::ALL
        .iter()
        .map(|c| format!("{}: {}", c, distribution.count(*c)))
        .collect();
    format!("{table}\n{}\n", counts.join("  "))
}

/// The seven bias sources in their fixed order.
pub fn format_bias_inventory(sources: &[BiasSource], adaptive: &AdaptiveWeights) -> String {
    let mut table = new_table(vec![
        "Bias",
        "Sev",
        "Scope",
        "Pers",
        "Hist",
        "Feas",
        "Score",
        "Priority",
    ]);
    for source in sources {
        let d = &source.dimensions;
        table.add_row(vec![
            Cell::new(source.bias_type.as_str()),
            number_cell(d.severity.to_string()),
            number_cell(d.scope.to_string()),
            number_cell(d.persistence.to_string()),
            number_cell(d.historical_alignment.to_string()),
            number_cell(d.feasibility.to_string()),
            number_cell(to_fixed(source.weighted_score, 1)),
            Cell::new(colored_priority(source.priority).to_string()),
        ]);
    }
    format!("{table}\n{}\n", adaptive.rationale.dimmed())
}

pub fn format_recommended_metrics(metrics: &[RecommendedMetric]) -> String {
    if metrics.is_empty() {
        return String::new();
    }
    let mut table = new_table(vec!["Metric", "Formula", "Bias source", "Why"]);
    for m in metrics {
        table.add_row(vec![m.metric, m.formula, m.bias_source.as_str(), m.reason]);
    }
    format!("{table}\n")
}

fn weight_row(table: &mut Table, name: &str, w: &BiasWeights) {
    table.add_row(vec![
        Cell::new(name),
        number_cell(to_fixed(w.severity, 2)),
        number_cell(to_fixed(w.scope, 2)),
        number_cell(to_fixed(w.persistence, 2)),
        number_cell(to_fixed(w.historical_alignment, 2)),
        number_cell(to_fixed(w.feasibility, 2)),
        number_cell(to_fixed(w.sum(), 2)),
    ]);
}

const WEIGHT_HEADER: [&str; 7] = ["Profile", "Severity", "Scope", "Persistence", "Historical", "Feasibility", "Sum"];

pub fn format_weights(definition: &str, adaptive: &AdaptiveWeights) -> String {
    let mut table = new_table(WEIGHT_HEADER.to_vec());
    let name = if definition.is_empty() { "(none)" } else { definition };
    weight_row(&mut table, name, &adaptive.weights);
    format!("{table}\n{}\n", adaptive.rationale)
}

/// Base weights followed by every adaptive profile.
pub fn format_weight_profiles() -> String {
    let mut table = new_table(WEIGHT_HEADER.to_vec());
    weight_row(&mut table, "Default", &BiasWeights::BASE);
    for profile in &ADAPTIVE_WEIGHT_PROFILES {
        weight_row(
            &mut table,
            profile.definition,
            &BiasWeights::BASE.merged(&profile.overrides),
        );
    }
    format!("{table}\n")
}

pub fn format_progress(progress: &[(Component, ComponentProgress)]) -> String {
    let mut out = String::new();
    for (component, p) in progress {
        let status = format!("{}/{} ({}%)", p.completed, p.total, p.percent);
        let status = if p.is_complete() {
            status.green().to_string()
        } else {
            status.yellow().to_string()
        };
        out.push_str(&format!(
            "{} {}\n",
            format!("Component {}: {}", component.number(), component.title()).bold(),
            status
        ));
        for item in &p.items {
            let mark = if item.complete { "[x]".green() } else { "[ ]".dimmed() };
            out.push_str(&format!("  {} {}\n", mark, item.label));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bias::get_adaptive_weights;
    use crate::risk::create_risk_entry;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_risk_matrix_lists_highest_first() {
        plain();
        let matrix = vec![
            create_risk_entry("R1", "Low risk", 1.0, 2.0, 2.0),
            create_risk_entry("R2", "Averaging error", 5.0, 5.0, 4.0),
        ];
        let text = format_risk_matrix(&matrix);
        let r2 = text.find("Averaging error").unwrap();
        let r1 = text.find("Low risk").unwrap();
        assert!(r2 < r1);
        assert!(text.contains("Critical: 1  Elevated: 0  Moderate: 0  Low: 1"));
    }

    #[test]
    fn test_empty_matrix() {
        assert_eq!(format_risk_matrix(&[]), "No risks recorded.\n");
    }

    #[test]
    fn test_profiles_table_has_every_profile() {
        plain();
        let text = format_weight_profiles();
        for profile in &ADAPTIVE_WEIGHT_PROFILES {
            assert!(text.contains(profile.definition));
        }
        assert!(text.contains("1.05"));
    }

    #[test]
    fn test_weights_show_rationale() {
        plain();
        let adaptive = get_adaptive_weights("Equal Opportunity");
        let text = format_weights("Equal Opportunity", &adaptive);
        assert!(text.ends_with(&format!("{}\n", adaptive.rationale)));
    }
}
