//! Progressive context: the summaries of every component upstream of the one
//! being worked on, in component order.

use super::findings::{finding_for_line, FindingsSection};
use super::summarizers::build_summary;
use super::summary::SummaryLine;
use crate::common::single_line;
use crate::model::{AuditState, Component};
use serde::Serialize;
use std::fmt;

/// Which part of the state a section was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionSource {
    Summary(Component),
    Intersections,
    FeedbackLoops,
}

/// A titled block of context, rendered as `=== title ===` then its lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextSection {
    pub title: String,
    pub source: SectionSource,
    /// False when the section only carries the empty-component sentinel
    pub has_content: bool,
    pub lines: Vec<SummaryLine>,
}

impl ContextSection {
    fn header(&self) -> String {
        format!("=== {} ===", self.title)
    }
}

impl fmt::Display for ContextSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header())?;
        for line in &self.lines {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressiveContext {
    pub component: Component,
    pub sections: Vec<ContextSection>,
}

impl ProgressiveContext {
    /// True when any upstream section has something beyond a sentinel.
    pub fn has_content(&self) -> bool {
        self.sections.iter().any(|s| s.has_content)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections separated by one blank line; empty for Component 1.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The prior-findings view of these sections.
    pub fn findings(&self) -> Vec<FindingsSection> {
        self.sections
            .iter()
            .map(|section| FindingsSection {
                heading: section.title.clone(),
                lines: section.lines.iter().filter_map(finding_for_line).collect(),
            })
            .collect()
    }
}

impl fmt::Display for ProgressiveContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

fn summary_section(state: &AuditState, component: Component) -> ContextSection {
    let summary = build_summary(state, component);
    ContextSection {
        title: format!("Component {}: {}", component.number(), component.title()),
        source: SectionSource::Summary(component),
        has_content: summary.has_content(),
        lines: summary.display_lines(),
    }
}

fn intersections_section(state: &AuditState) -> Option<ContextSection> {
    let intersections = &state.c1.intersections;
    if intersections.is_empty() {
        return None;
    }
    let lines = intersections
        .iter()
        .map(|ix| {
            SummaryLine::bullet(
                0,
                format!(
                    "{} (priority {}): {}",
                    single_line(&ix.groups),
                    ix.priority,
                    single_line(&ix.pattern)
                ),
            )
        })
        .collect();
    Some(ContextSection {
        title: "Intersectional Groups from C1".to_string(),
        source: SectionSource::Intersections,
        has_content: true,
        lines,
    })
}

fn feedback_loops_section(state: &AuditState) -> Option<ContextSection> {
    let loops = &state.c1.feedback_loops;
    if loops.is_empty() {
        return None;
    }
    let lines = loops
        .iter()
        .flat_map(|fl| {
            [
                SummaryLine::bullet(0, format!("Trigger: {}", single_line(&fl.trigger))),
                SummaryLine::field(2, "Mechanism", single_line(&fl.mechanism)),
                SummaryLine::field(2, "Amplification", single_line(&fl.amplification)),
            ]
        })
        .collect();
    Some(ContextSection {
        title: "Feedback Loops from C1".to_string(),
        source: SectionSource::FeedbackLoops,
        has_content: true,
        lines,
    })
}

/// Context for work on `component`: upstream summaries, plus the raw C1
/// intersections and feedback loops when building for Component 4.
pub fn build_progressive_context(state: &AuditState, component: Component) -> ProgressiveContext {
    let mut sections: Vec<ContextSection> = component
        .upstream()
        .iter()
        .map(|upstream| summary_section(state, *upstream))
        .collect();

    if component == Component::C4 {
        sections.extend(intersections_section(state));
        sections.extend(feedback_loops_section(state));
    }

    log::debug!(
        "Built context for {} with {} sections",
        component,
        sections.len()
    );
    ProgressiveContext { component, sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::parse_findings;
    use crate::model::{FeedbackLoop, Intersection};

    #[test]
    fn test_c1_context_is_empty() {
        let context = build_progressive_context(&AuditState::new_audit(), Component::C1);
        assert!(context.is_empty());
        assert_eq!(context.render(), "");
    }

    #[test]
    fn test_blank_audit_c3_context_has_sentinels() {
        let context = build_progressive_context(&AuditState::new_audit(), Component::C3);
        assert!(!context.has_content());
        assert_eq!(
            context.render(),
            "=== Component 1: Historical Context ===\nNo Component 1 data yet.\n\n=== Component 2: Fairness Definitions ===\nNo Component 2 data yet."
        );
    }

    #[test]
    fn test_c4_extracts_do_not_depend_on_c3() {
        let mut state = AuditState::new_audit();
        state.c1.intersections.push(Intersection {
            groups: "Young + Indigenous".into(),
            priority: 1,
            pattern: "Compounded".into(),
        });
        state.c1.feedback_loops.push(FeedbackLoop {
            trigger: "Notice".into(),
            mechanism: "Repayment".into(),
            amplification: "Hardship".into(),
            ..Default::default()
        });

        let text = build_progressive_context(&state, Component::C4).render();
        assert!(text.contains("No Component 3 data yet."));
        assert!(text.contains(
            "\n\n=== Intersectional Groups from C1 ===\n- Young + Indigenous (priority 1): Compounded"
        ));
        assert!(text.ends_with(
            "=== Feedback Loops from C1 ===\n- Trigger: Notice\n  Mechanism: Repayment\n  Amplification: Hardship"
        ));
    }

    #[test]
    fn test_findings_agree_with_reparsed_text() {
        let mut state = AuditState::new_audit();
        state.c1.domain_context.system = "OCI".into();
        state.c1.feedback_loops.push(FeedbackLoop {
            trigger: "Notice".into(),
            ..Default::default()
        });
        let context = build_progressive_context(&state, Component::C4);
        assert_eq!(context.findings(), parse_findings(&context.render()));
    }
}
