//! Prior-findings view: headed sections of key/value, bullet and text lines.
//!
//! Findings come from two routes. Builder output converts its structured
//! lines directly ([`finding_for_line`]); text that arrives without structure
//! is re-parsed with [`parse_findings`]. Each line kind is mapped the way the
//! parser would read its rendered form, so both routes agree on builder
//! output.

use super::summary::{LineKind, SummaryLine};
use crate::model::Component;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^===\s+(.+?)\s+===$").unwrap());
static STEP_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*Step\s+\d").unwrap());
static KEY_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z][A-Za-z\s/&]+?):\s+(.+)$").unwrap());
static BULLET_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-•]\s+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FindingsLine {
    KeyValue { key: String, value: String },
    Bullet { value: String },
    Text { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FindingsSection {
    /// Empty for lines that precede the first header
    pub heading: String,
    pub lines: Vec<FindingsLine>,
}

impl FindingsSection {
    /// Component a heading refers to, matched on keywords.
    pub fn component(&self) -> Option<Component> {
        heading_component(&self.heading)
    }
}

pub fn heading_component(heading: &str) -> Option<Component> {
    const KEYWORDS: [(&str, Component); 9] = [
        ("Component 1", Component::C1),
        ("Historical Context", Component::C1),
        ("C1", Component::C1),
        ("Component 2", Component::C2),
        ("Fairness Definition", Component::C2),
        ("C2", Component::C2),
        ("Component 3", Component::C3),
        ("Bias Source", Component::C3),
        ("C3", Component::C3),
    ];
    KEYWORDS
        .iter()
        .find(|(keyword, _)| heading.contains(keyword))
        .map(|(_, component)| *component)
}

/// Classify one raw line. `None` for blank lines.
fn classify_line(line: &str) -> Option<FindingsLine> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with("- ") || trimmed.starts_with("• ") {
        return Some(FindingsLine::Bullet {
            value: BULLET_MARKER.replace(trimmed, "").into_owned(),
        });
    }

    if STEP_LINE.is_match(line) {
        return Some(match trimmed.find(':') {
            Some(idx) if idx > 0 => FindingsLine::KeyValue {
                key: trimmed[..idx].to_string(),
                value: trimmed[idx + 1..].trim().to_string(),
            },
            _ => FindingsLine::Text {
                value: trimmed.to_string(),
            },
        });
    }

    if let Some(caps) = KEY_VALUE.captures(trimmed) {
        return Some(FindingsLine::KeyValue {
            key: caps[1].to_string(),
            value: caps[2].to_string(),
        });
    }

    Some(FindingsLine::Text {
        value: trimmed.to_string(),
    })
}

/// Parse rendered context text into findings sections.
pub fn parse_findings(raw: &str) -> Vec<FindingsSection> {
    let mut sections = Vec::new();
    let mut current = FindingsSection::default();

    for line in raw.split('\n') {
        if let Some(caps) = HEADER.captures(line) {
            if !current.heading.is_empty() || !current.lines.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
            current.heading = caps[1].to_string();
            continue;
        }
        if let Some(finding) = classify_line(line) {
            current.lines.push(finding);
        }
    }

    if !current.heading.is_empty() || !current.lines.is_empty() {
        sections.push(current);
    }
    sections
}

/// The finding a structured line reads as, `None` if it renders blank.
pub fn finding_for_line(line: &SummaryLine) -> Option<FindingsLine> {
    match &line.kind {
        LineKind::Field { key, value } => {
            let value = value.trim();
            Some(if value.is_empty() {
                FindingsLine::Text {
                    value: format!("{}:", key.trim()),
                }
            } else {
                FindingsLine::KeyValue {
                    key: key.clone(),
                    value: value.to_string(),
                }
            })
        }
        LineKind::Step { number, text } => Some(FindingsLine::KeyValue {
            key: format!("Step {number}"),
            value: text.trim().to_string(),
        }),
        LineKind::Bullet { text } => {
            let text = text.trim();
            Some(if text.is_empty() {
                FindingsLine::Text {
                    value: "-".to_string(),
                }
            } else {
                FindingsLine::Bullet {
                    value: text.to_string(),
                }
            })
        }
        // Headings carry no value after their colon, so they read as text.
        LineKind::Heading { .. } | LineKind::Text { .. } => classify_line(&line.render()),
    }
}
