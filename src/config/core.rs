use serde::{Deserialize, Serialize};

use crate::bias::BiasPriorityThresholds;
use crate::error::{AuditError, Result};
use crate::formatting::ColorMode;
use crate::metrics::DEFAULT_METRIC_THRESHOLD;
use crate::risk::RiskThresholds;

/// Root configuration structure, read from `.fairness-audit.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AuditConfig {
    /// Classification bands for risks and bias sources
    #[serde(default)]
    pub thresholds: ThresholdsConfig,

    /// Metric interpretation settings
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// Terminal output settings
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ThresholdsConfig {
    #[serde(default)]
    pub risk: RiskThresholds,
    #[serde(default)]
    pub bias: BiasPriorityThresholds,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Regulatory threshold used when `interpret` is not given one
    #[serde(default = "default_metric_threshold")]
    pub default_threshold: f64,
}

fn default_metric_threshold() -> f64 {
    DEFAULT_METRIC_THRESHOLD
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            default_threshold: default_metric_threshold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// auto, always or never
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "auto".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl OutputConfig {
    pub fn color_mode(&self) -> ColorMode {
        ColorMode::parse(&self.color).unwrap_or(ColorMode::Auto)
    }
}

impl AuditConfig {
    pub fn validate(&self) -> Result<()> {
        self.thresholds.risk.validate().map_err(AuditError::Config)?;
        self.thresholds.bias.validate().map_err(AuditError::Config)?;

        let threshold = self.metrics.default_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(AuditError::Config(format!(
                "metrics.default_threshold must be a non-negative number, got {threshold}"
            )));
        }

        if ColorMode::parse(&self.output.color).is_none() {
            return Err(AuditError::Config(format!(
                "output.color must be auto, always or never, got '{}'",
                self.output.color
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = AuditConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.thresholds.risk.critical, 90.0);
        assert_eq!(config.thresholds.bias.high, 3.5);
        assert_eq!(config.metrics.default_threshold, 0.05);
        assert_eq!(config.output.color_mode(), ColorMode::Auto);
    }

    #[test]
    fn test_descending_risk_bands_rejected() {
        let mut config = AuditConfig::default();
        config.thresholds.risk.moderate = 50.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("risk thresholds must ascend"));
    }

    #[test]
    fn test_unknown_color_rejected() {
        let mut config = AuditConfig::default();
        config.output.color = "sometimes".into();
        assert!(config.validate().is_err());
    }
}
