mod common;

use fairness_audit::context::{build_progressive_context, parse_findings, FindingsLine};
use fairness_audit::data::learn_state;
use fairness_audit::model::{FeedbackLoop, Intersection};
use fairness_audit::store::AuditCommand;
use fairness_audit::Component;
use indoc::indoc;
use pretty_assertions::assert_eq;

#[test]
fn test_c3_context_renders_upstream_summaries() {
    let state = common::sample_state();
    let context = build_progressive_context(&state, Component::C3);

    let expected = indoc! {"
        === Component 1: Historical Context ===
        System: Payment review
        Decision type: Debt recovery
        Affected population: Welfare recipients
        Risk matrix: 2 risks identified (1 Critical)
          - Income averaging (score: 125)
        Protected groups: Indigenous Australians, Young people

        === Component 2: Fairness Definitions ===
        Decision framework answers:
          Step 1: How reliable are outcome labels? → Low
        Primary definition: Equalized Odds — Labels are unreliable"};
    assert_eq!(context.render(), expected);
    assert!(context.has_content());
}

#[test]
fn test_c2_context_is_only_c1() {
    let state = common::sample_state();
    let c2 = build_progressive_context(&state, Component::C2).render();
    let c3 = build_progressive_context(&state, Component::C3).render();
    assert!(c3.starts_with(&c2));
    assert!(!c2.contains("Component 2"));
}

#[test]
fn test_c4_appends_intersections_and_feedback_loops() {
    let mut store = common::sample_store();
    store
        .dispatch_at(
            AuditCommand::AddIntersection(Intersection {
                groups: "Indigenous × young".into(),
                priority: 1,
                pattern: "Highest debt rates".into(),
            }),
            common::EDIT_TIME,
        )
        .unwrap();
    store
        .dispatch_at(
            AuditCommand::AddFeedbackLoop(FeedbackLoop {
                trigger: "Debt notice".into(),
                mechanism: "Stress".into(),
                amplification: "More notices".into(),
                ..Default::default()
            }),
            common::EDIT_TIME,
        )
        .unwrap();

    let rendered = build_progressive_context(store.state(), Component::C4).render();
    let tail = indoc! {"
        === Intersectional Groups from C1 ===
        - Indigenous × young (priority 1): Highest debt rates

        === Feedback Loops from C1 ===
        - Trigger: Debt notice
          Mechanism: Stress
          Amplification: More notices"};
    assert!(rendered.ends_with(tail), "unexpected tail:\n{rendered}");
    assert!(rendered.contains("=== Component 3: Bias Sources ===\nNo Component 3 data yet."));
}

#[test]
fn test_rendered_context_parses_back_to_same_findings() {
    let context = build_progressive_context(&learn_state(), Component::C4);
    assert_eq!(parse_findings(&context.render()), context.findings());
}

#[test]
fn test_findings_split_key_values_and_bullets() {
    let state = common::sample_state();
    let findings = build_progressive_context(&state, Component::C2).findings();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].component(), Some(Component::C1));
    assert_eq!(
        findings[0].lines[0],
        FindingsLine::KeyValue {
            key: "System".into(),
            value: "Payment review".into(),
        }
    );
    assert!(findings[0].lines.contains(&FindingsLine::Bullet {
        value: "Income averaging (score: 125)".into(),
    }));
}
