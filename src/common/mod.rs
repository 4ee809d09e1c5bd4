//! Small numeric and text helpers shared by the scoring and context modules.

/// Round to `decimals` places, with halves rounding toward positive infinity.
///
/// Scores shown in the worksheet have always been rounded this way, so a
/// negative half (-2.25) goes to -2.2 rather than away from zero.
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}

/// Fixed-decimal text with halves rounded away from zero, the way
/// worksheet figures have always been printed (`0.25` at one place is `0.3`).
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let magnitude = (value.abs() * factor + 0.5).floor() / factor;
    let rounded = if value < 0.0 { -magnitude } else { magnitude };
    format!("{:.*}", decimals, rounded)
}

/// Collapse line breaks so user free text cannot split a summary line.
pub fn single_line(text: &str) -> String {
    if !text.contains(['\n', '\r']) {
        return text.to_string();
    }
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when the text has at least one non-whitespace character.
pub fn is_non_blank(text: &str) -> bool {
    !text.trim().is_empty()
}
