//! Component 4: fairness metrics and reporting.
//!
//! Statistical validation results are display strings entered by the auditor
//! (or shipped with the case study); nothing in this crate computes them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRate {
    pub group: String,
    pub rate: f64,
    pub spd: String,
    pub ci: (f64, f64),
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpdComparison {
    pub comparison: String,
    pub spd: f64,
    pub ci: (f64, f64),
    pub significant: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRateEntry {
    pub group: String,
    pub rate: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorRates {
    pub overall: f64,
    pub by_group: Vec<ErrorRateEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntersectionalStatus {
    Ref,
    Elevated,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntersectionalRow {
    pub subgroup: String,
    pub rate: f64,
    pub spd: String,
    pub error_rate: f64,
    pub status: IntersectionalStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdPoint {
    pub tolerance: String,
    pub false_positive_rate: f64,
    pub true_positive_rate: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatisticalValidation {
    pub bootstrap: String,
    pub permutation: String,
    pub effect_size: String,
    pub bayesian: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationEffort {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub horizon: String,
    pub action: String,
    pub impact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<RecommendationEffort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_impact: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditDimension {
    pub dimension: String,
    pub score: f64,
    pub max: f64,
    #[serde(default)]
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DebtNoticeRates {
    pub by_age: Vec<GroupRate>,
    pub by_indigenous: Vec<GroupRate>,
    pub by_region: Vec<GroupRate>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricSummary {
    pub highest_group_rate: String,
    pub lowest_group_rate: String,
    #[serde(rename = "worstSPD")]
    pub worst_spd: String,
    pub overall_error_rate: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct C4Data {
    pub debt_notice_rates: DebtNoticeRates,
    pub spd: Vec<SpdComparison>,
    pub error_rates: ErrorRates,
    pub intersectional: Vec<IntersectionalRow>,
    pub threshold_sensitivity: Vec<ThresholdPoint>,
    pub statistical_validation: StatisticalValidation,
    pub recommendations: Vec<Recommendation>,
    pub audit_dimensions: Vec<AuditDimension>,
    pub group_outcome_rates: String,
    pub error_rate_analysis: String,
    pub intersectional_analysis: String,
    pub threshold_analysis: String,
    pub validation_bootstrap: String,
    pub validation_permutation: String,
    pub validation_effect_size: String,
    pub validation_bayesian: String,
    pub pre_deployment_recs: String,
    pub post_deployment_recs: String,
    pub audit_dimension_scores: String,
    pub metric_summary: MetricSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_summary_keeps_spd_acronym() {
        let summary = MetricSummary {
            worst_spd: "+0.41".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["worstSPD"], "+0.41");
    }

    #[test]
    fn test_ci_is_a_two_element_array() {
        let cmp: SpdComparison = serde_json::from_str(
            r#"{"comparison":"Indigenous vs Non-Indigenous","spd":0.21,"ci":[0.15,0.27],"significant":true}"#,
        )
        .unwrap();
        assert_eq!(cmp.ci, (0.15, 0.27));
    }
}
