use colored::*;
use std::env;
use std::io::IsTerminal;

use crate::model::{BiasPriority, RiskClassification};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Colour when stdout is a terminal
    Auto,
    /// Always colour
    Always,
    /// Never colour
    Never,
}

impl ColorMode {
    /// Parse a config-file value, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Start from `color` and let the environment override it.
    pub fn from_env(color: ColorMode) -> Self {
        let mut config = Self::new(color);

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    /// Set the process-wide `colored` override to match this config.
    pub fn apply(&self) {
        colored::control::set_override(self.color.should_use_color());
    }
}

pub fn classification_color(classification: RiskClassification) -> Color {
    match classification {
        RiskClassification::Critical => Color::Red,
        RiskClassification::Elevated => Color::Yellow,
        RiskClassification::Moderate => Color::Blue,
        RiskClassification::Low => Color::Green,
    }
}

pub fn priority_color(priority: BiasPriority) -> Color {
    match priority {
        BiasPriority::High => Color::Red,
        BiasPriority::Medium => Color::Yellow,
        BiasPriority::Low => Color::Green,
    }
}

pub fn colored_classification(classification: RiskClassification) -> ColoredString {
    classification
        .as_str()
        .color(classification_color(classification))
        .bold()
}

pub fn colored_priority(priority: BiasPriority) -> ColoredString {
    priority.as_str().color(priority_color(priority))
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_parse() {
        assert_eq!(ColorMode::parse("ALWAYS"), Some(ColorMode::Always));
        assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
        assert_eq!(ColorMode::parse("sometimes"), None);
        assert!(ColorMode::Always.should_use_color());
        assert!(!ColorMode::Never.should_use_color());
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(classification_color(RiskClassification::Critical), Color::Red);
        assert_eq!(priority_color(BiasPriority::Low), Color::Green);
    }
}
