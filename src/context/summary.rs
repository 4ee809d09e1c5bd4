//! Line-typed summaries rendered to text only at the boundary.

use crate::model::Component;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LineKind {
    /// `Key: value`
    Field { key: String, value: String },
    /// `Step N: text`
    Step { number: u32, text: String },
    /// A label introducing the lines below it, rendered with a trailing colon
    Heading { text: String },
    /// `- text`
    Bullet { text: String },
    Text { text: String },
}

/// One output line with its leading indentation in spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub indent: usize,
    #[serde(flatten)]
    pub kind: LineKind,
}

impl SummaryLine {
    pub fn field(indent: usize, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            indent,
            kind: LineKind::Field {
                key: key.into(),
                value: value.into(),
            },
        }
    }

    pub fn step(indent: usize, number: u32, text: impl Into<String>) -> Self {
        Self {
            indent,
            kind: LineKind::Step {
                number,
                text: text.into(),
            },
        }
    }

    pub fn heading(indent: usize, text: impl Into<String>) -> Self {
        Self {
            indent,
            kind: LineKind::Heading { text: text.into() },
        }
    }

    pub fn bullet(indent: usize, text: impl Into<String>) -> Self {
        Self {
            indent,
            kind: LineKind::Bullet { text: text.into() },
        }
    }

    pub fn text(indent: usize, text: impl Into<String>) -> Self {
        Self {
            indent,
            kind: LineKind::Text { text: text.into() },
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$}", "", width = self.indent)?;
        match &self.kind {
            LineKind::Field { key, value } => write!(f, "{key}: {value}"),
            LineKind::Step { number, text } => write!(f, "Step {number}: {text}"),
            LineKind::Heading { text } => write!(f, "{text}:"),
            LineKind::Bullet { text } => write!(f, "- {text}"),
            LineKind::Text { text } => f.write_str(text),
        }
    }
}

/// Text shown in place of a component summary that has nothing to report.
pub fn empty_sentinel(component: Component) -> String {
    format!("No Component {} data yet.", component.number())
}

/// Summary of one component's worksheet state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSummary {
    pub component: Component,
    pub lines: Vec<SummaryLine>,
}

impl ComponentSummary {
    pub fn new(component: Component, lines: Vec<SummaryLine>) -> Self {
        Self { component, lines }
    }

    pub fn has_content(&self) -> bool {
        !self.lines.is_empty()
    }

    /// Lines to display: the summary lines, or the sentinel when empty.
    pub fn display_lines(&self) -> Vec<SummaryLine> {
        if self.has_content() {
            self.lines.clone()
        } else {
            vec![SummaryLine::text(0, empty_sentinel(self.component))]
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ComponentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_content() {
            return f.write_str(&empty_sentinel(self.component));
        }
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
