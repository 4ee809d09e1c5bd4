//! Starter risks offered when a worksheet's risk matrix is empty.

use super::create_risk_entry;
use crate::model::RiskMatrixEntry;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskTemplate {
    pub risk: &'static str,
    pub severity: f64,
    pub likelihood: f64,
    pub relevance: f64,
}

pub const RISK_TEMPLATES: [RiskTemplate; 5] = [
    RiskTemplate {
        risk: "Algorithm relies on flawed or unvalidated assumptions",
        severity: 3.0,
        likelihood: 3.0,
        relevance: 3.0,
    },
    RiskTemplate {
        risk: "Training data underrepresents affected groups",
        severity: 3.0,
        likelihood: 3.0,
        relevance: 3.0,
    },
    RiskTemplate {
        risk: "Disproportionate negative outcomes for vulnerable populations",
        severity: 4.0,
        likelihood: 3.0,
        relevance: 3.0,
    },
    RiskTemplate {
        risk: "Insufficient human oversight of automated decisions",
        severity: 3.0,
        likelihood: 3.0,
        relevance: 3.0,
    },
    RiskTemplate {
        risk: "No adequate appeal or redress mechanism",
        severity: 3.0,
        likelihood: 3.0,
        relevance: 3.0,
    },
];

/// Instantiate a template as a scored matrix entry.
pub fn risk_from_template(id: impl Into<String>, template: &RiskTemplate) -> RiskMatrixEntry {
    create_risk_entry(
        id,
        template.risk,
        template.severity,
        template.likelihood,
        template.relevance,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskClassification;

    #[test]
    fn test_templates_score_as_moderate() {
        let entries: Vec<_> = RISK_TEMPLATES
            .iter()
            .enumerate()
            .map(|(i, t)| risk_from_template(format!("T{}", i + 1), t))
            .collect();

        assert_eq!(entries[0].score, 27.0);
        assert_eq!(entries[2].score, 36.0);
        assert!(entries
            .iter()
            .all(|e| e.classification == RiskClassification::Moderate));
    }
}
