//! Plain-language readings of fairness metric values.

use crate::common::to_fixed;

/// Regulatory tolerance used when the caller has no configured threshold.
pub const DEFAULT_METRIC_THRESHOLD: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetricKind {
    ParityDifference,
    FalsePositiveRate,
    ErrorRate,
    Other,
}

impl MetricKind {
    fn from_name(name: &str) -> Self {
        match name {
            "SPD" | "Statistical Parity Difference" => MetricKind::ParityDifference,
            "FPR" | "False Positive Rate" => MetricKind::FalsePositiveRate,
            "Error Rate" => MetricKind::ErrorRate,
            _ => MetricKind::Other,
        }
    }
}

/// One sentence describing `value` for `group_a` relative to `group_b`.
///
/// Percentage points are `|value| × 100` with no decimals; the ratio is
/// `|value| / threshold` to one decimal, or `N/A` when the threshold is not
/// positive. Unrecognised metric names get a generic sentence carrying the
/// raw value.
pub fn interpret_metric(
    name: &str,
    value: f64,
    group_a: &str,
    group_b: &str,
    threshold: f64,
) -> String {
    let magnitude = value.abs();
    let points = to_fixed(magnitude * 100.0, 0);
    let ratio = if threshold > 0.0 {
        to_fixed(magnitude / threshold, 1)
    } else {
        "N/A".to_string()
    };
    let direction = if value > 0.0 { "more" } else { "less" };

    match MetricKind::from_name(name) {
        MetricKind::ParityDifference => format!(
            "{group_a} is {points} percentage points {direction} likely to receive the outcome than {group_b} ({ratio}x the {}pp regulatory threshold).",
            to_fixed(threshold * 100.0, 0)
        ),
        MetricKind::FalsePositiveRate => format!(
            "{group_a} faces a {points}% false positive rate vs {group_b}, a difference of {points}pp."
        ),
        MetricKind::ErrorRate => format!(
            "{points}% of decisions for {group_a} were incorrect — {ratio}x the acceptable threshold."
        ),
        MetricKind::Other => format!(
            "{name}: {} for {group_a} vs {group_b} (threshold: {threshold}).",
            to_fixed(value, 3)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spd_sentence() {
        let text = interpret_metric(
            "SPD",
            0.21,
            "Indigenous Australians",
            "Non-Indigenous recipients",
            DEFAULT_METRIC_THRESHOLD,
        );
        assert_eq!(
            text,
            "Indigenous Australians is 21 percentage points more likely to receive the outcome than Non-Indigenous recipients (4.2x the 5pp regulatory threshold)."
        );
    }

    #[test]
    fn test_negative_value_reads_less() {
        let text = interpret_metric("Statistical Parity Difference", -0.1, "A", "B", 0.05);
        assert!(text.contains("10 percentage points less likely"));
        assert!(text.contains("2.0x"));
    }

    #[test]
    fn test_fpr_and_error_rate() {
        assert_eq!(
            interpret_metric("FPR", 0.12, "Young adults", "Older adults", 0.05),
            "Young adults faces a 12% false positive rate vs Older adults, a difference of 12pp."
        );
        assert_eq!(
            interpret_metric("Error Rate", 0.74, "all recipients", "", 0.05),
            "74% of decisions for all recipients were incorrect — 14.8x the acceptable threshold."
        );
    }

    #[test]
    fn test_zero_threshold_gives_na_ratio() {
        let text = interpret_metric("Error Rate", 0.3, "A", "B", 0.0);
        assert!(text.contains("N/A"));
    }

    #[test]
    fn test_generic_formatter() {
        assert_eq!(
            interpret_metric("Disparate Impact Ratio", 0.8, "A", "B", 0.05),
            "Disparate Impact Ratio: 0.800 for A vs B (threshold: 0.05)."
        );
    }
}
