//! Risk matrix scoring for Component 1.
//!
//! A risk's score is the product of three 1–5 ratings (severity, likelihood,
//! relevance), so scores run from 1 to 125. Classification bands are
//! Critical ≥ 90, Elevated ≥ 40, Moderate ≥ 15, Low below that. These bands
//! are the only ones used anywhere in the crate, including the legend text
//! returned by [`RiskThresholds::legend`].
//!
//! Inputs are not clamped: the worksheet validates rating ranges, and the
//! scoring functions compute with whatever they are handed.

pub mod templates;

pub use templates::{risk_from_template, RiskTemplate, RISK_TEMPLATES};

use crate::common::round_half_up;
use crate::model::{RiskClassification, RiskMatrixEntry};
use serde::{Deserialize, Serialize};

/// Score a risk as severity × likelihood × relevance, rounded to 2 decimals.
pub fn calculate_risk_score(severity: f64, likelihood: f64, relevance: f64) -> f64 {
    round_half_up(severity * likelihood * relevance, 2)
}

/// Classify a score with the default bands.
pub fn classify_risk(score: f64) -> RiskClassification {
    classify_risk_with(score, &RiskThresholds::default())
}

/// Classify a score with configured bands.
pub fn classify_risk_with(score: f64, thresholds: &RiskThresholds) -> RiskClassification {
    if score >= thresholds.critical {
        RiskClassification::Critical
    } else if score >= thresholds.elevated {
        RiskClassification::Elevated
    } else if score >= thresholds.moderate {
        RiskClassification::Moderate
    } else {
        RiskClassification::Low
    }
}

/// Lower bounds of the Moderate, Elevated and Critical bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    #[serde(default = "default_critical")]
    pub critical: f64,
    #[serde(default = "default_elevated")]
    pub elevated: f64,
    #[serde(default = "default_moderate")]
    pub moderate: f64,
}

fn default_critical() -> f64 {
    90.0
}
fn default_elevated() -> f64 {
    40.0
}
fn default_moderate() -> f64 {
    15.0
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            critical: default_critical(),
            elevated: default_elevated(),
            moderate: default_moderate(),
        }
    }
}

impl RiskThresholds {
    /// Bands must be strictly ascending: moderate < elevated < critical.
    pub fn validate(&self) -> Result<(), String> {
        if self.moderate < self.elevated && self.elevated < self.critical {
            Ok(())
        } else {
            Err(format!(
                "risk thresholds must ascend (moderate {} < elevated {} < critical {})",
                self.moderate, self.elevated, self.critical
            ))
        }
    }

    /// Legend lines for displays that explain the bands.
    pub fn legend(&self) -> Vec<String> {
        vec![
            format!("Critical (Score >= {})", self.critical),
            format!("Elevated (Score {}-{})", self.elevated, self.critical - 1.0),
            format!("Moderate (Score {}-{})", self.moderate, self.elevated - 1.0),
            format!("Low (Score < {})", self.moderate),
        ]
    }
}

/// Build an entry with its score and classification computed together.
pub fn create_risk_entry(
    id: impl Into<String>,
    risk: impl Into<String>,
    severity: f64,
    likelihood: f64,
    relevance: f64,
) -> RiskMatrixEntry {
    let score = calculate_risk_score(severity, likelihood, relevance);
    RiskMatrixEntry {
        id: id.into(),
        risk: risk.into(),
        severity,
        likelihood,
        relevance,
        score,
        classification: classify_risk(score),
    }
}

/// A blank entry as added from the worksheet: all ratings 1.
pub fn blank_risk_entry(id: impl Into<String>) -> RiskMatrixEntry {
    create_risk_entry(id, "", 1.0, 1.0, 1.0)
}

/// Recompute score and classification from the entry's current ratings.
pub fn rescore_entry(entry: &mut RiskMatrixEntry, thresholds: &RiskThresholds) {
    entry.score = calculate_risk_score(entry.severity, entry.likelihood, entry.relevance);
    entry.classification = classify_risk_with(entry.score, thresholds);
}

/// Entries ordered by descending score; ties keep their original order.
pub fn sort_risk_matrix(matrix: &[RiskMatrixEntry]) -> Vec<RiskMatrixEntry> {
    let mut sorted = matrix.to_vec();
    sorted.sort_by(|a, b| b.score.total_cmp(&a.score));
    sorted
}

/// The most severe classification in the matrix, Low when empty.
pub fn highest_classification(matrix: &[RiskMatrixEntry]) -> RiskClassification {
    matrix
        .iter()
        .map(|r| r.classification)
        .max()
        .unwrap_or(RiskClassification::Low)
}

/// Count of entries per classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RiskDistribution {
    pub critical: usize,
    pub elevated: usize,
    pub moderate: usize,
    pub low: usize,
}

impl RiskDistribution {
    pub fn from_entries(matrix: &[RiskMatrixEntry]) -> Self {
        matrix.iter().fold(Self::default(), |mut acc, r| {
            match r.classification {
                RiskClassification::Critical => acc.critical += 1,
                RiskClassification::Elevated => acc.elevated += 1,
                RiskClassification::Moderate => acc.moderate += 1,
                RiskClassification::Low => acc.low += 1,
            }
            acc
        })
    }

    pub fn count(&self, classification: RiskClassification) -> usize {
        match classification {
            RiskClassification::Critical => self.critical,
            RiskClassification::Elevated => self.elevated,
            RiskClassification::Moderate => self.moderate,
            RiskClassification::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.elevated + self.moderate + self.low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_product() {
        assert_eq!(calculate_risk_score(5.0, 5.0, 5.0), 125.0);
        assert_eq!(calculate_risk_score(3.0, 3.0, 3.0), 27.0);
        assert_eq!(calculate_risk_score(1.1, 1.1, 1.1), 1.33);
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(classify_risk(90.0), RiskClassification::Critical);
        assert_eq!(classify_risk(89.99), RiskClassification::Elevated);
        assert_eq!(classify_risk(75.0), RiskClassification::Elevated);
        assert_eq!(classify_risk(40.0), RiskClassification::Elevated);
        assert_eq!(classify_risk(39.0), RiskClassification::Moderate);
        assert_eq!(classify_risk(15.0), RiskClassification::Moderate);
        assert_eq!(classify_risk(14.0), RiskClassification::Low);
        assert_eq!(classify_risk(1.0), RiskClassification::Low);
    }

    #[test]
    fn test_out_of_range_inputs_are_computed_not_rejected() {
        assert_eq!(calculate_risk_score(6.0, 5.0, 5.0), 150.0);
        assert_eq!(classify_risk(-3.0), RiskClassification::Low);
    }

    #[test]
    fn test_create_entry_sets_classification_from_score() {
        let entry = create_risk_entry("R3", "Disproportionate impact", 4.0, 5.0, 5.0);
        assert_eq!(entry.score, 100.0);
        assert_eq!(entry.classification, RiskClassification::Critical);
    }

    #[test]
    fn test_rescore_after_rating_change() {
        let mut entry = blank_risk_entry("R1");
        assert_eq!(entry.classification, RiskClassification::Low);
        entry.severity = 5.0;
        entry.likelihood = 4.0;
        rescore_entry(&mut entry, &RiskThresholds::default());
        assert_eq!(entry.score, 20.0);
        assert_eq!(entry.classification, RiskClassification::Moderate);
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let matrix = vec![
            create_risk_entry("A", "", 2.0, 2.0, 2.0),
            create_risk_entry("B", "", 5.0, 5.0, 5.0),
            create_risk_entry("C", "", 2.0, 2.0, 2.0),
        ];
        let ids: Vec<_> = sort_risk_matrix(&matrix).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_distribution_and_highest() {
        let matrix = vec![
            create_risk_entry("A", "", 5.0, 5.0, 5.0),
            create_risk_entry("B", "", 4.0, 4.0, 4.0),
            create_risk_entry("C", "", 1.0, 1.0, 1.0),
        ];
        let dist = RiskDistribution::from_entries(&matrix);
        assert_eq!(dist.critical, 1);
        assert_eq!(dist.elevated, 1);
        assert_eq!(dist.low, 1);
        assert_eq!(dist.total(), 3);
        assert_eq!(highest_classification(&matrix), RiskClassification::Critical);
        assert_eq!(highest_classification(&[]), RiskClassification::Low);
    }

    #[test]
    fn test_thresholds_validate_and_legend() {
        assert!(RiskThresholds::default().validate().is_ok());
        let bad = RiskThresholds {
            critical: 30.0,
            elevated: 40.0,
            moderate: 15.0,
        };
        assert!(bad.validate().is_err());
        let legend = RiskThresholds::default().legend();
        assert_eq!(legend[0], "Critical (Score >= 90)");
        assert_eq!(legend[1], "Elevated (Score 40-89)");
    }
}
