use anyhow::Result;
use colored::*;

use crate::cli::OutputFormat;
use crate::context::{build_progressive_context, build_summary, FindingsLine, FindingsSection};
use crate::model::{AuditState, Component};
use crate::output::to_json;

/// Progressive context for `component`, or its prior-findings view.
pub fn handle_context(
    state: &AuditState,
    component: Component,
    findings: bool,
    format: OutputFormat,
) -> Result<String> {
    let _span = tracing::info_span!("context", component = %component).entered();
    let context = build_progressive_context(state, component);
    tracing::debug!(sections = context.sections.len(), "Built progressive context");

    if context.is_empty() {
        return Ok(match format {
            OutputFormat::Json => to_json(&context)?,
            OutputFormat::Text => format!(
                "Component {} has no upstream components.\n",
                component.number()
            ),
        });
    }

    match (format, findings) {
        (OutputFormat::Json, false) => Ok(to_json(&context)?),
        (OutputFormat::Json, true) => Ok(to_json(&context.findings())?),
        (OutputFormat::Text, false) => Ok(format!("{}\n", context.render())),
        (OutputFormat::Text, true) => Ok(render_findings(&context.findings())),
    }
}

/// A single component's summary.
pub fn handle_summary(state: &AuditState, component: Component, format: OutputFormat) -> Result<String> {
    let _span = tracing::info_span!("summary", component = %component).entered();
    let summary = build_summary(state, component);
    match format {
        OutputFormat::Json => Ok(to_json(&summary)?),
        OutputFormat::Text => Ok(format!("{}\n", summary.render())),
    }
}

fn render_findings(sections: &[FindingsSection]) -> String {
    let mut out = String::new();
    for section in sections {
        if !section.heading.is_empty() {
            out.push_str(&format!("{}\n", section.heading.bold().underline()));
        }
        for line in &section.lines {
            let rendered = match line {
                FindingsLine::KeyValue { key, value } => format!("  {} {}", format!("{key}:").cyan(), value),
                FindingsLine::Bullet { value } => format!("  • {value}"),
                FindingsLine::Text { value } => format!("  {}", value.dimmed()),
            };
            out.push_str(&rendered);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::learn_state;

    #[test]
    fn test_component_one_has_no_context() {
        let text = handle_context(&learn_state(), Component::C1, false, OutputFormat::Text).unwrap();
        assert_eq!(text, "Component 1 has no upstream components.\n");
    }

    #[test]
    fn test_c3_context_carries_both_upstream_sections() {
        let text = handle_context(&learn_state(), Component::C3, false, OutputFormat::Text).unwrap();
        let c1 = text.find("=== Component 1: Historical Context ===").unwrap();
        let c2 = text.find("=== Component 2: Fairness Definitions ===").unwrap();
        assert!(c1 < c2);
    }

    #[test]
    fn test_findings_json_is_headed() {
        let json = handle_context(&learn_state(), Component::C2, true, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let sections = value.as_array().unwrap();
        assert!(!sections.is_empty());
        assert!(sections[0]["heading"].as_str().unwrap().contains("Component 1"));
    }

    #[test]
    fn test_c4_summary_is_sentinel() {
        let text = handle_summary(&learn_state(), Component::C4, OutputFormat::Text).unwrap();
        assert_eq!(text, "No Component 4 data yet.\n");
    }
}
