//! Dimension weights and the adaptive profiles keyed by fairness definition.

use serde::{Deserialize, Serialize};

/// Full weight set applied to the five bias dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasWeights {
    pub severity: f64,
    pub scope: f64,
    pub persistence: f64,
    pub historical_alignment: f64,
    pub feasibility: f64,
}

impl BiasWeights {
    pub const BASE: BiasWeights = BiasWeights {
        severity: 0.30,
        scope: 0.20,
        persistence: 0.20,
        historical_alignment: 0.20,
        feasibility: 0.10,
    };

    /// Overlay the fields an override sets; unset fields keep `self`.
    pub fn merged(self, overrides: &WeightOverrides) -> Self {
        Self {
            severity: overrides.severity.unwrap_or(self.severity),
            scope: overrides.scope.unwrap_or(self.scope),
            persistence: overrides.persistence.unwrap_or(self.persistence),
            historical_alignment: overrides
                .historical_alignment
                .unwrap_or(self.historical_alignment),
            feasibility: overrides.feasibility.unwrap_or(self.feasibility),
        }
    }

    /// Merged profiles are not renormalised, so this can differ from 1.0.
    pub fn sum(&self) -> f64 {
        self.severity + self.scope + self.persistence + self.historical_alignment + self.feasibility
    }

    /// As a fully populated override, for callers that pass weights through
    /// [`super::calculate_weighted_score`].
    pub fn as_overrides(&self) -> WeightOverrides {
        WeightOverrides {
            severity: Some(self.severity),
            scope: Some(self.scope),
            persistence: Some(self.persistence),
            historical_alignment: Some(self.historical_alignment),
            feasibility: Some(self.feasibility),
        }
    }
}

impl Default for BiasWeights {
    fn default() -> Self {
        Self::BASE
    }
}

/// Partial weight set; `None` fields fall back to the base weights.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeightOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical_alignment: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feasibility: Option<f64>,
}

/// A named override with the sentence shown to explain it.
#[derive(Debug, Clone, Copy)]
pub struct WeightProfile {
    pub definition: &'static str,
    pub overrides: WeightOverrides,
    pub rationale: &'static str,
}

pub const DEFAULT_WEIGHTS_RATIONALE: &str =
    "Using default weights — no definition-specific adjustments.";

/// Profiles are matched on the exact, case-sensitive definition name.
pub const ADAPTIVE_WEIGHT_PROFILES: [WeightProfile; 5] = [
    WeightProfile {
        definition: "Calibration",
        overrides: WeightOverrides {
            severity: Some(0.35),
            scope: Some(0.15),
            persistence: None,
            historical_alignment: Some(0.25),
            feasibility: None,
        },
        rationale: "Calibration prioritises severity and historical alignment — a miscalibrated system that replicates historical patterns is the primary risk.",
    },
    WeightProfile {
        definition: "Demographic Parity",
        overrides: WeightOverrides {
            severity: None,
            scope: Some(0.30),
            persistence: None,
            historical_alignment: None,
            feasibility: Some(0.05),
        },
        rationale: "Demographic Parity focuses on scope — how many groups are affected matters most when the goal is equal outcome rates.",
    },
    WeightProfile {
        definition: "Equal Opportunity",
        overrides: WeightOverrides {
            severity: Some(0.35),
            scope: Some(0.15),
            persistence: Some(0.25),
            historical_alignment: None,
            feasibility: None,
        },
        rationale: "Equal Opportunity emphasises severity and persistence — persistent errors in detecting true positives across groups are the key concern.",
    },
    WeightProfile {
        definition: "Equalized Odds",
        overrides: WeightOverrides {
            severity: Some(0.30),
            scope: Some(0.25),
            persistence: Some(0.20),
            historical_alignment: Some(0.15),
            feasibility: Some(0.10),
        },
        rationale: "Equalized Odds balances severity and scope — both false positive and false negative disparities must be tracked broadly.",
    },
    WeightProfile {
        definition: "Predictive Parity",
        overrides: WeightOverrides {
            severity: Some(0.35),
            scope: Some(0.15),
            persistence: None,
            historical_alignment: Some(0.25),
            feasibility: None,
        },
        rationale: "Predictive Parity focuses on whether predictions mean the same thing across groups — severity and historical patterns drive miscalibration.",
    },
];

/// Resolved weights for a primary definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdaptiveWeights {
    pub weights: BiasWeights,
    pub rationale: String,
}

pub fn find_profile(primary_definition: &str) -> Option<&'static WeightProfile> {
    ADAPTIVE_WEIGHT_PROFILES
        .iter()
        .find(|p| p.definition == primary_definition)
}

/// Weights for the given primary definition. Unknown names (including the
/// empty string) resolve to the base weights.
pub fn get_adaptive_weights(primary_definition: &str) -> AdaptiveWeights {
    match find_profile(primary_definition) {
        Some(profile) => AdaptiveWeights {
            weights: BiasWeights::BASE.merged(&profile.overrides),
            rationale: profile.rationale.to_string(),
        },
        None => AdaptiveWeights {
            weights: BiasWeights::BASE,
            rationale: DEFAULT_WEIGHTS_RATIONALE.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demographic_parity_overrides_scope_and_feasibility() {
        let adaptive = get_adaptive_weights("Demographic Parity");
        assert_eq!(adaptive.weights.scope, 0.30);
        assert_eq!(adaptive.weights.feasibility, 0.05);
        assert_eq!(adaptive.weights.severity, 0.30);
        assert_eq!(adaptive.weights.persistence, 0.20);
        assert_eq!(adaptive.weights.historical_alignment, 0.20);
        assert!(!adaptive.rationale.is_empty());
        assert_ne!(adaptive.rationale, DEFAULT_WEIGHTS_RATIONALE);
    }

    #[test]
    fn test_unknown_definition_falls_back_to_base() {
        for name in ["", "Unknown", "demographic parity", "Equalised Odds"] {
            let adaptive = get_adaptive_weights(name);
            assert_eq!(adaptive.weights, BiasWeights::BASE, "{name}");
            assert_eq!(adaptive.rationale, DEFAULT_WEIGHTS_RATIONALE);
        }
    }

    #[test]
    fn test_merged_profiles_are_not_renormalised() {
        let dp = get_adaptive_weights("Demographic Parity").weights;
        assert!((dp.sum() - 1.05).abs() < 1e-9);
        let cal = get_adaptive_weights("Calibration").weights;
        assert!((cal.sum() - 1.05).abs() < 1e-9);
        let odds = get_adaptive_weights("Equalized Odds").weights;
        assert!((odds.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_every_profile_resolves() {
        for profile in &ADAPTIVE_WEIGHT_PROFILES {
            let adaptive = get_adaptive_weights(profile.definition);
            assert_eq!(adaptive.rationale, profile.rationale);
        }
    }
}
