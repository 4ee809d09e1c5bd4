//! Per-component summaries of worksheet state, Components 1 to 3.

use super::summary::{ComponentSummary, SummaryLine};
use crate::common::{single_line, to_fixed};
use crate::model::{AuditState, Component, RiskClassification};

/// Domain context (gated on the system name), critical risks, protected
/// groups, feedback loops, intersections and label reliability.
pub fn build_c1_summary(state: &AuditState) -> ComponentSummary {
    let c1 = &state.c1;
    let mut lines = Vec::new();

    let domain = &c1.domain_context;
    if !domain.system.is_empty() {
        lines.push(SummaryLine::field(0, "System", single_line(&domain.system)));
        lines.push(SummaryLine::field(0, "Decision type", single_line(&domain.decision_type)));
        lines.push(SummaryLine::field(
            0,
            "Affected population",
            single_line(&domain.affected_population),
        ));
    }

    if !c1.risk_matrix.is_empty() {
        let critical: Vec<_> = c1
            .risk_matrix
            .iter()
            .filter(|r| r.classification == RiskClassification::Critical)
            .collect();
        lines.push(SummaryLine::field(
            0,
            "Risk matrix",
            format!(
                "{} risks identified ({} Critical)",
                c1.risk_matrix.len(),
                critical.len()
            ),
        ));
        lines.extend(critical.iter().map(|r| {
            SummaryLine::bullet(2, format!("{} (score: {})", single_line(&r.risk), r.score))
        }));
    }

    if !c1.protected_groups.is_empty() {
        let names: Vec<String> = c1
            .protected_groups
            .iter()
            .map(|g| single_line(&g.group))
            .collect();
        lines.push(SummaryLine::field(0, "Protected groups", names.join(", ")));
    }

    if !c1.feedback_loops.is_empty() {
        lines.push(SummaryLine::field(
            0,
            "Feedback loops",
            format!("{} identified", c1.feedback_loops.len()),
        ));
        for fl in &c1.feedback_loops {
            lines.push(SummaryLine::bullet(2, format!("Trigger: {}", single_line(&fl.trigger))));
            lines.push(SummaryLine::field(4, "Mechanism", single_line(&fl.mechanism)));
            lines.push(SummaryLine::field(4, "Amplification", single_line(&fl.amplification)));
        }
    }

    if !c1.intersections.is_empty() {
        lines.push(SummaryLine::field(
            0,
            "Intersectional groups",
            format!("{} identified", c1.intersections.len()),
        ));
        for ix in &c1.intersections {
            lines.push(SummaryLine::bullet(
                2,
                format!(
                    "{} (priority {}): {}",
                    single_line(&ix.groups),
                    ix.priority,
                    single_line(&ix.pattern)
                ),
            ));
        }
    }

    let label_reliability = &c1.data_representation.label_reliability;
    if !label_reliability.is_empty() {
        lines.push(SummaryLine::field(0, "Label reliability", single_line(label_reliability)));
    }

    ComponentSummary::new(Component::C1, lines)
}

/// Answered decision steps and the chosen definitions.
pub fn build_c2_summary(state: &AuditState) -> ComponentSummary {
    let c2 = &state.c2;
    let mut lines = Vec::new();

    let answered: Vec<_> = c2.answered_steps().collect();
    if !answered.is_empty() {
        lines.push(SummaryLine::heading(0, "Decision framework answers"));
        lines.extend(answered.iter().map(|s| {
            SummaryLine::step(
                2,
                s.step,
                format!(
                    "{} → {}",
                    single_line(&s.question),
                    single_line(&s.answer.display())
                ),
            )
        }));
    }

    for (label, selection) in [
        ("Primary definition", &c2.primary_selection),
        ("Secondary definition", &c2.secondary_selection),
    ] {
        if !selection.definition.is_empty() {
            lines.push(SummaryLine::field(
                0,
                label,
                format!(
                    "{} — {}",
                    single_line(&selection.definition),
                    single_line(&selection.justification)
                ),
            ));
        }
    }

    ComponentSummary::new(Component::C2, lines)
}

/// Bias sources scored above the unscored default, highest first.
pub fn build_c3_summary(state: &AuditState) -> ComponentSummary {
    let mut scored: Vec<_> = state.c3.bias_sources.iter().filter(|s| s.is_scored()).collect();
    if scored.is_empty() {
        return ComponentSummary::new(Component::C3, Vec::new());
    }
    scored.sort_by(|a, b| b.weighted_score.total_cmp(&a.weighted_score));

    let mut lines = vec![SummaryLine::heading(0, "Bias sources (prioritized)")];
    lines.extend(scored.iter().map(|s| {
        let description = if s.description.is_empty() {
            "No description".to_string()
        } else {
            single_line(&s.description)
        };
        SummaryLine::bullet(
            2,
            format!(
                "{}: {} ({}) — {}",
                s.bias_type,
                to_fixed(s.weighted_score, 1),
                s.priority,
                description
            ),
        )
    }));

    ComponentSummary::new(Component::C3, lines)
}

/// Summary of `component`; Component 4 has no summary of its own and yields
/// an empty one.
pub fn build_summary(state: &AuditState, component: Component) -> ComponentSummary {
    match component {
        Component::C1 => build_c1_summary(state),
        Component::C2 => build_c2_summary(state),
        Component::C3 => build_c3_summary(state),
        Component::C4 => ComponentSummary::new(Component::C4, Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BiasPriority, BiasType, FeedbackLoop, StepAnswer};
    use crate::risk::create_risk_entry;

    #[test]
    fn test_empty_c1_renders_sentinel() {
        let state = AuditState::new_audit();
        assert_eq!(build_c1_summary(&state).render(), "No Component 1 data yet.");
    }

    #[test]
    fn test_c1_without_system_keeps_other_lines() {
        let mut state = AuditState::new_audit();
        state.c1.risk_matrix.push(create_risk_entry("R1", "Income averaging", 5.0, 5.0, 5.0));
        state.c1.feedback_loops.push(FeedbackLoop {
            trigger: "Debt notice".into(),
            mechanism: "Stress".into(),
            amplification: "More notices".into(),
            ..Default::default()
        });

        let text = build_c1_summary(&state).render();
        assert!(!text.contains("System:"));
        assert!(text.contains("Risk matrix: 1 risks identified (1 Critical)"));
        assert!(text.contains("  - Income averaging (score: 125)"));
        assert!(text.contains("  - Trigger: Debt notice\n    Mechanism: Stress"));
    }

    #[test]
    fn test_only_critical_risks_are_listed() {
        let mut state = AuditState::new_audit();
        state.c1.risk_matrix.push(create_risk_entry("R1", "Minor", 2.0, 2.0, 2.0));
        let summary = build_c1_summary(&state);
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.render(), "Risk matrix: 1 risks identified (0 Critical)");
    }

    #[test]
    fn test_c2_lists_only_answered_steps() {
        let mut state = AuditState::new_audit();
        state.c2.decision_framework[1].answer = StepAnswer::Single("False Positives".into());
        state.c2.decision_framework[5].answer =
            StepAnswer::Multiple(vec!["Age × Region".into(), "Indigenous × Region".into()]);

        let text = build_c2_summary(&state).render();
        assert_eq!(
            text,
            "Decision framework answers:\n  Step 2: Which errors cause more harm? → False Positives\n  Step 6: Which intersections require evaluation? → Age × Region, Indigenous × Region"
        );
    }

    #[test]
    fn test_c3_sorts_scored_sources_descending() {
        let mut state = AuditState::new_audit();
        state.c3.bias_sources[0].weighted_score = 2.0;
        state.c3.bias_sources[0].priority = BiasPriority::Low;
        state.c3.bias_sources[6].weighted_score = 4.0;
        state.c3.bias_sources[6].priority = BiasPriority::High;
        state.c3.bias_sources[6].description = "Burden of proof reversed".into();

        let summary = build_c3_summary(&state);
        assert_eq!(summary.lines.len(), 3);
        assert_eq!(
            summary.render(),
            "Bias sources (prioritized):\n  - Deployment: 4.0 (High) — Burden of proof reversed\n  - Historical: 2.0 (Low) — No description"
        );
        assert_eq!(state.c3.bias_sources[0].bias_type, BiasType::Historical);
    }

    #[test]
    fn test_user_newlines_are_flattened() {
        let mut state = AuditState::new_audit();
        state.c1.domain_context.system = "Line one\nLine two".into();
        let summary = build_c1_summary(&state);
        assert_eq!(summary.lines[0].render(), "System: Line one Line two");
    }
}
