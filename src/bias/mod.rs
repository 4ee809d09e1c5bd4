//! Weighted five-dimension scoring for Component 3 bias sources.
//!
//! A source's weighted score is Σ dimension × weight, rounded to one decimal,
//! and its priority tier follows from that score. The weights are the base set
//! unless the primary fairness definition chosen in Component 2 has an
//! adaptive profile (see [`weights`]).

pub mod metrics_map;
pub mod weights;

pub use metrics_map::{recommended_metrics, RecommendedMetric};
pub use weights::{
    get_adaptive_weights, AdaptiveWeights, BiasWeights, WeightOverrides, WeightProfile,
    ADAPTIVE_WEIGHT_PROFILES, DEFAULT_WEIGHTS_RATIONALE,
};

use crate::common::round_half_up;
use crate::model::{BiasDimensions, BiasPriority, BiasSource};
use serde::{Deserialize, Serialize};

/// Weighted sum of the dimensions, rounded to one decimal. Overrides are
/// merged field-by-field onto the base weights.
pub fn calculate_weighted_score(
    dimensions: &BiasDimensions,
    overrides: Option<&WeightOverrides>,
) -> f64 {
    let w = match overrides {
        Some(o) => BiasWeights::BASE.merged(o),
        None => BiasWeights::BASE,
    };
    weighted_sum(dimensions, &w)
}

/// Weighted sum under an already resolved weight set.
pub fn weighted_sum(dimensions: &BiasDimensions, w: &BiasWeights) -> f64 {
    let score = dimensions.severity * w.severity
        + dimensions.scope * w.scope
        + dimensions.persistence * w.persistence
        + dimensions.historical_alignment * w.historical_alignment
        + dimensions.feasibility * w.feasibility;
    round_half_up(score, 1)
}

/// Tier lower bounds for weighted scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiasPriorityThresholds {
    #[serde(default = "default_high")]
    pub high: f64,
    #[serde(default = "default_medium")]
    pub medium: f64,
}

fn default_high() -> f64 {
    3.5
}
fn default_medium() -> f64 {
    2.5
}

impl Default for BiasPriorityThresholds {
    fn default() -> Self {
        Self {
            high: default_high(),
            medium: default_medium(),
        }
    }
}

impl BiasPriorityThresholds {
    pub fn validate(&self) -> Result<(), String> {
        if self.medium < self.high {
            Ok(())
        } else {
            Err(format!(
                "bias thresholds must ascend (medium {} < high {})",
                self.medium, self.high
            ))
        }
    }
}

/// `≥3.5` High, `≥2.5` Medium, otherwise Low.
pub fn classify_bias_priority(score: f64) -> BiasPriority {
    classify_bias_priority_with(score, &BiasPriorityThresholds::default())
}

pub fn classify_bias_priority_with(score: f64, thresholds: &BiasPriorityThresholds) -> BiasPriority {
    if score >= thresholds.high {
        BiasPriority::High
    } else if score >= thresholds.medium {
        BiasPriority::Medium
    } else {
        BiasPriority::Low
    }
}

/// Refresh a source's weighted score and priority from its dimensions.
pub fn rescore_source(
    source: &mut BiasSource,
    weights: &BiasWeights,
    thresholds: &BiasPriorityThresholds,
) {
    source.weighted_score = weighted_sum(&source.dimensions, weights);
    source.priority = classify_bias_priority_with(source.weighted_score, thresholds);
}

/// Refresh every source under the profile of `primary_definition`.
pub fn rescore_sources(
    sources: &mut [BiasSource],
    primary_definition: &str,
    thresholds: &BiasPriorityThresholds,
) {
    let weights = get_adaptive_weights(primary_definition).weights;
    log::debug!(
        "Rescoring {} bias sources with weights for '{}'",
        sources.len(),
        primary_definition
    );
    for source in sources.iter_mut() {
        rescore_source(source, &weights, thresholds);
    }
}
