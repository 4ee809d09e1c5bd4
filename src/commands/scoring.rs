//! One-off calculations: risk scores, bias scores, weights and metric readings.

use anyhow::{bail, Result};
use serde::Serialize;

use crate::bias::{
    classify_bias_priority_with, get_adaptive_weights, weighted_sum, AdaptiveWeights, BiasWeights,
    ADAPTIVE_WEIGHT_PROFILES, DEFAULT_WEIGHTS_RATIONALE,
};
use crate::cli::OutputFormat;
use crate::config::AuditConfig;
use crate::metrics::interpret_metric;
use crate::model::{BiasDimensions, BiasPriority, RiskClassification};
use crate::output::{format_bias_score, format_risk_score, format_weight_profiles, format_weights, to_json};
use crate::risk::{calculate_risk_score, classify_risk_with};

const RATING_RANGE: std::ops::RangeInclusive<f64> = 1.0..=5.0;

fn check_rating(name: &str, value: f64) -> Result<()> {
    if !RATING_RANGE.contains(&value) {
        bail!("{name} must be between 1 and 5 (got {value})");
    }
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RiskScoreReport {
    severity: f64,
    likelihood: f64,
    relevance: f64,
    score: f64,
    classification: RiskClassification,
}

pub fn handle_risk(
    severity: f64,
    likelihood: f64,
    relevance: f64,
    config: &AuditConfig,
    format: OutputFormat,
) -> Result<String> {
    check_rating("severity", severity)?;
    check_rating("likelihood", likelihood)?;
    check_rating("relevance", relevance)?;

    let thresholds = &config.thresholds.risk;
    let score = calculate_risk_score(severity, likelihood, relevance);
    let classification = classify_risk_with(score, thresholds);
    tracing::debug!(score, %classification, "Scored risk");

    match format {
        OutputFormat::Json => Ok(to_json(&RiskScoreReport {
            severity,
            likelihood,
            relevance,
            score,
            classification,
        })?),
        OutputFormat::Text => Ok(format_risk_score(score, classification, thresholds)),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BiasScoreReport<'a> {
    definition: &'a str,
    dimensions: BiasDimensions,
    weights: BiasWeights,
    weighted_score: f64,
    priority: BiasPriority,
    rationale: &'a str,
}

pub fn handle_bias(
    dimensions: BiasDimensions,
    definition: &str,
    config: &AuditConfig,
    format: OutputFormat,
) -> Result<String> {
    check_rating("severity", dimensions.severity)?;
    check_rating("scope", dimensions.scope)?;
    check_rating("persistence", dimensions.persistence)?;
    check_rating("historical alignment", dimensions.historical_alignment)?;
    check_rating("feasibility", dimensions.feasibility)?;

    let adaptive = get_adaptive_weights(definition);
    let score = weighted_sum(&dimensions, &adaptive.weights);
    let priority = classify_bias_priority_with(score, &config.thresholds.bias);
    tracing::debug!(score, definition, "Scored bias source");

    match format {
        OutputFormat::Json => Ok(to_json(&BiasScoreReport {
            definition,
            dimensions,
            weights: adaptive.weights,
            weighted_score: score,
            priority,
            rationale: &adaptive.rationale,
        })?),
        OutputFormat::Text => Ok(format_bias_score(score, priority, &adaptive)),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NamedWeights {
    definition: String,
    #[serde(flatten)]
    adaptive: AdaptiveWeights,
}

/// Weights for one definition, or every profile when `definition` is `None`.
pub fn handle_weights(definition: Option<&str>, format: OutputFormat) -> Result<String> {
    match (definition, format) {
        (Some(name), OutputFormat::Text) => Ok(format_weights(name, &get_adaptive_weights(name))),
        (Some(name), OutputFormat::Json) => Ok(to_json(&NamedWeights {
            definition: name.to_string(),
            adaptive: get_adaptive_weights(name),
        })?),
        (None, OutputFormat::Text) => Ok(format_weight_profiles()),
        (None, OutputFormat::Json) => {
            let mut all = vec![NamedWeights {
                definition: "Default".to_string(),
                adaptive: AdaptiveWeights {
                    weights: BiasWeights::BASE,
                    rationale: DEFAULT_WEIGHTS_RATIONALE.to_string(),
                },
            }];
            all.extend(ADAPTIVE_WEIGHT_PROFILES.iter().map(|p| NamedWeights {
                definition: p.definition.to_string(),
                adaptive: get_adaptive_weights(p.definition),
            }));
            Ok(to_json(&all)?)
        }
    }
}

pub struct InterpretArgs<'a> {
    pub metric: &'a str,
    pub value: f64,
    pub group_a: &'a str,
    pub group_b: &'a str,
    pub threshold: Option<f64>,
}

pub fn handle_interpret(args: InterpretArgs<'_>, config: &AuditConfig, format: OutputFormat) -> Result<String> {
    let threshold = args.threshold.unwrap_or(config.metrics.default_threshold);
    let sentence = interpret_metric(args.metric, args.value, args.group_a, args.group_b, threshold);
    match format {
        OutputFormat::Json => Ok(to_json(&serde_json::json!({
            "metric": args.metric,
            "value": args.value,
            "threshold": threshold,
            "interpretation": sentence,
        }))?),
        OutputFormat::Text => Ok(format!("{sentence}\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_risk_json_report() {
        let json = handle_risk(5.0, 5.0, 4.0, &AuditConfig::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["score"], 100.0);
        assert_eq!(value["classification"], "Critical");
    }

    #[test]
    fn test_risk_rejects_out_of_range_rating() {
        let err = handle_risk(6.0, 1.0, 1.0, &AuditConfig::default(), OutputFormat::Text).unwrap_err();
        assert_eq!(err.to_string(), "severity must be between 1 and 5 (got 6)");
    }

    #[test]
    fn test_configured_bands_change_classification() {
        plain();
        let mut config = AuditConfig::default();
        config.thresholds.risk.critical = 20.0;
        config.thresholds.risk.elevated = 10.0;
        config.thresholds.risk.moderate = 5.0;
        let text = handle_risk(3.0, 3.0, 3.0, &config, OutputFormat::Text).unwrap();
        assert!(text.starts_with("Risk score: 27 (Critical)"));
    }

    #[test]
    fn test_bias_uses_definition_profile() {
        let dims = BiasDimensions {
            severity: 1.0,
            scope: 5.0,
            persistence: 1.0,
            historical_alignment: 1.0,
            feasibility: 2.0,
        };
        let json = handle_bias(dims, "Demographic Parity", &AuditConfig::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["weightedScore"], 2.3);
        assert_eq!(value["priority"], "Low");
    }

    #[test]
    fn test_all_profiles_listed_as_json() {
        let json = handle_weights(None, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), ADAPTIVE_WEIGHT_PROFILES.len() + 1);
        assert_eq!(value[0]["definition"], "Default");
    }

    #[test]
    fn test_interpret_uses_configured_threshold() {
        let mut config = AuditConfig::default();
        config.metrics.default_threshold = 0.1;
        let text = handle_interpret(
            InterpretArgs {
                metric: "SPD",
                value: 0.21,
                group_a: "A",
                group_b: "B",
                threshold: None,
            },
            &config,
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(
            text,
            "A is 21 percentage points more likely to receive the outcome than B (2.1x the 10pp regulatory threshold).\n"
        );
    }
}
