//! Fairness metrics recommended for each bias type.

use crate::model::{BiasSource, BiasType};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedMetric {
    pub metric: &'static str,
    pub formula: &'static str,
    pub reason: &'static str,
    pub bias_source: BiasType,
}

const fn metric(
    bias_source: BiasType,
    metric: &'static str,
    formula: &'static str,
    reason: &'static str,
) -> RecommendedMetric {
    RecommendedMetric {
        metric,
        formula,
        reason,
        bias_source,
    }
}

const HISTORICAL: &[RecommendedMetric] = &[
    metric(
        BiasType::Historical,
        "Statistical Parity Difference",
        "P(Y=1|G=a) - P(Y=1|G=b)",
        "Detects outcome rate disparities rooted in historical discrimination patterns",
    ),
    metric(
        BiasType::Historical,
        "Disparate Impact Ratio",
        "P(Y=1|G=a) / P(Y=1|G=b)",
        "Four-fifths rule compliance check for historically disadvantaged groups",
    ),
];

const REPRESENTATION: &[RecommendedMetric] = &[
    metric(
        BiasType::Representation,
        "Coverage Ratio",
        "n_group / N_population_group",
        "Measures whether training data represents each group proportionally",
    ),
    metric(
        BiasType::Representation,
        "Representation Gap",
        "|p_data - p_population|",
        "Quantifies deviation between data composition and true population",
    ),
];

const MEASUREMENT: &[RecommendedMetric] = &[
    metric(
        BiasType::Measurement,
        "Calibration by Group",
        "E[Y|S=s, G=g] = s for all g",
        "Tests whether scores mean the same thing across groups",
    ),
    metric(
        BiasType::Measurement,
        "Disaggregated FPR/FNR",
        "FP_g/(FP_g+TN_g) per group",
        "Reveals measurement errors that fall disproportionately on specific groups",
    ),
];

const AGGREGATION: &[RecommendedMetric] = &[metric(
    BiasType::Aggregation,
    "Subgroup Accuracy",
    "Accuracy_g for each subgroup g",
    "Detects whether one-size-fits-all models underperform for specific subgroups",
)];

const LEARNING: &[RecommendedMetric] = &[metric(
    BiasType::Learning,
    "Prediction Drift",
    "KL(P_t || P_t+1) per group",
    "Monitors whether model predictions shift disproportionately for some groups",
)];

const EVALUATION: &[RecommendedMetric] = &[metric(
    BiasType::Evaluation,
    "Disaggregated Accuracy",
    "Accuracy_g for all groups",
    "Ensures evaluation metrics are not masking group-level performance gaps",
)];

const DEPLOYMENT: &[RecommendedMetric] = &[
    metric(
        BiasType::Deployment,
        "Outcome Drift",
        "SPD_t+1 - SPD_t",
        "Tracks whether deployment context introduces new or worsening disparities",
    ),
    metric(
        BiasType::Deployment,
        "Appeal/Override Rate by Group",
        "appeals_g / decisions_g",
        "Higher appeal rates in specific groups signal deployment-context bias",
    ),
];

pub fn metrics_for(bias_type: BiasType) -> &'static [RecommendedMetric] {
    match bias_type {
        BiasType::Historical => HISTORICAL,
        BiasType::Representation => REPRESENTATION,
        BiasType::Measurement => MEASUREMENT,
        BiasType::Aggregation => AGGREGATION,
        BiasType::Learning => LEARNING,
        BiasType::Evaluation => EVALUATION,
        BiasType::Deployment => DEPLOYMENT,
    }
}

/// Metrics for the given sources, highest weighted score first, each metric
/// listed once.
pub fn recommended_metrics(sources: &[BiasSource]) -> Vec<RecommendedMetric> {
    let mut ordered: Vec<&BiasSource> = sources.iter().collect();
    ordered.sort_by(|a, b| b.weighted_score.total_cmp(&a.weighted_score));

    let mut seen = HashSet::new();
    ordered
        .into_iter()
        .flat_map(|source| metrics_for(source.bias_type).iter().copied())
        .filter(|m| seen.insert(m.metric))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(bias_type: BiasType, score: f64) -> BiasSource {
        let mut source = BiasSource::unscored(bias_type);
        source.weighted_score = score;
        source
    }

    #[test]
    fn test_highest_scored_source_leads() {
        let sources = vec![
            scored(BiasType::Learning, 2.0),
            scored(BiasType::Deployment, 4.5),
        ];
        let names: Vec<_> = recommended_metrics(&sources).iter().map(|m| m.metric).collect();
        assert_eq!(
            names,
            vec!["Outcome Drift", "Appeal/Override Rate by Group", "Prediction Drift"]
        );
    }

    #[test]
    fn test_metrics_are_deduplicated() {
        let sources = vec![
            scored(BiasType::Historical, 3.0),
            scored(BiasType::Historical, 2.0),
        ];
        assert_eq!(recommended_metrics(&sources).len(), 2);
        assert!(recommended_metrics(&[]).is_empty());
    }

    #[test]
    fn test_every_type_has_a_metric() {
        assert!(BiasType::ALL.iter().all(|t| !metrics_for(*t).is_empty()));
    }
}
