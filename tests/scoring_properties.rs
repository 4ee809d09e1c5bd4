//! Property-based tests for scoring and the store
//!
//! These tests verify invariants that should hold for all inputs:
//! - Risk classification is monotone in the score
//! - Every stored risk carries the score its ratings imply
//! - Bias priority follows the weighted score under the active profile
//! - Failed store commands leave the worksheet untouched
//! - Summaries, context and scores are identical across repeated calls

use fairness_audit::bias::{
    calculate_weighted_score, classify_bias_priority, get_adaptive_weights, weighted_sum,
};
use fairness_audit::context::{
    build_c1_summary, build_c2_summary, build_c3_summary, build_progressive_context,
};
use fairness_audit::interpret_metric;
use fairness_audit::model::{
    AuditMode, BiasDimensions, Component, DefinitionSelection, FeedbackLoop, ProtectedGroup,
    StepAnswer,
};
use fairness_audit::risk::{calculate_risk_score, classify_risk};
use fairness_audit::store::{AuditCommand, AuditStore, BiasSourcePatch, RiskPatch};
use proptest::prelude::*;

const PROFILE_NAMES: [&str; 7] = [
    "",
    "Calibration",
    "Demographic Parity",
    "Equal Opportunity",
    "Equalized Odds",
    "Predictive Parity",
    "Equalised Odds",
];

fn rating() -> impl Strategy<Value = f64> {
    (1u8..=5).prop_map(f64::from)
}

fn dimensions() -> impl Strategy<Value = BiasDimensions> {
    (rating(), rating(), rating(), rating(), rating()).prop_map(|(a, b, c, d, e)| BiasDimensions {
        severity: a,
        scope: b,
        persistence: c,
        historical_alignment: d,
        feasibility: e,
    })
}

fn worksheet_edits() -> impl Strategy<Value = Vec<AuditCommand>> {
    let risk = ("[A-Za-z ]{0,12}", rating(), rating(), rating()).prop_map(|(name, s, l, r)| {
        AuditCommand::AddRisk(fairness_audit::create_risk_entry("", &name, s, l, r))
    });
    let group = "[A-Za-z ]{1,12}".prop_map(|name| {
        AuditCommand::AddProtectedGroup(ProtectedGroup {
            group: name,
            ..Default::default()
        })
    });
    let feedback = ("[a-z ]{1,10}", "[a-z ]{0,10}").prop_map(|(trigger, mechanism)| {
        AuditCommand::AddFeedbackLoop(FeedbackLoop {
            trigger,
            mechanism,
            ..Default::default()
        })
    });
    let step = (0usize..7, "[A-Za-z]{0,8}").prop_map(|(index, answer)| {
        AuditCommand::AnswerDecisionStep {
            index,
            answer: StepAnswer::Single(answer),
            explanation: None,
        }
    });
    let definition = proptest::sample::select(PROFILE_NAMES.to_vec()).prop_map(|name| {
        AuditCommand::UpdatePrimarySelection(DefinitionSelection {
            definition: name.to_string(),
            justification: String::new(),
        })
    });
    let bias = (0usize..7, dimensions()).prop_map(|(index, dims)| AuditCommand::UpdateBiasSource {
        index,
        patch: BiasSourcePatch {
            dimensions: Some(dims),
            ..Default::default()
        },
    });
    proptest::collection::vec(prop_oneof![risk, group, feedback, step, definition, bias], 0..12)
}

fn audit_store() -> AuditStore {
    let store = AuditStore::new_audit();
    assert_eq!(store.state().mode, AuditMode::Audit);
    store
}

proptest! {
    #[test]
    fn prop_classification_is_monotone(a in 0.0f64..130.0, b in 0.0f64..130.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify_risk(low) <= classify_risk(high));
    }

    #[test]
    fn prop_integer_ratings_score_exactly(s in 1u8..=5, l in 1u8..=5, r in 1u8..=5) {
        let score = calculate_risk_score(f64::from(s), f64::from(l), f64::from(r));
        prop_assert_eq!(score, f64::from(u32::from(s) * u32::from(l) * u32::from(r)));
    }

    #[test]
    fn prop_stored_risks_match_their_ratings(
        edits in proptest::collection::vec((rating(), rating(), rating()), 1..8)
    ) {
        let mut store = audit_store();
        for (i, (s, l, r)) in edits.iter().enumerate() {
            store.dispatch(AuditCommand::AddBlankRisk).unwrap();
            store
                .dispatch(AuditCommand::UpdateRisk {
                    index: i,
                    patch: RiskPatch {
                        severity: Some(*s),
                        likelihood: Some(*l),
                        relevance: Some(*r),
                        ..Default::default()
                    },
                })
                .unwrap();
        }
        for (i, entry) in store.state().c1.risk_matrix.iter().enumerate() {
            prop_assert_eq!(&entry.id, &format!("R{}", i + 1));
            let expected = calculate_risk_score(entry.severity, entry.likelihood, entry.relevance);
            prop_assert_eq!(entry.score, expected);
            prop_assert_eq!(entry.classification, classify_risk(expected));
        }
    }

    #[test]
    fn prop_bias_priority_tracks_definition(
        dims in dimensions(),
        definition in proptest::sample::select(PROFILE_NAMES.to_vec()),
    ) {
        let mut store = audit_store();
        store
            .dispatch(AuditCommand::UpdateBiasSource {
                index: 2,
                patch: BiasSourcePatch { dimensions: Some(dims), ..Default::default() },
            })
            .unwrap();
        store
            .dispatch(AuditCommand::UpdatePrimarySelection(DefinitionSelection {
                definition: definition.to_string(),
                justification: String::new(),
            }))
            .unwrap();

        let source = &store.state().c3.bias_sources[2];
        let expected = weighted_sum(&dims, &get_adaptive_weights(definition).weights);
        prop_assert_eq!(source.weighted_score, expected);
        prop_assert_eq!(source.priority, classify_bias_priority(expected));
    }

    #[test]
    fn prop_out_of_range_edits_change_nothing(index in 0usize..20) {
        let mut store = audit_store();
        store.dispatch(AuditCommand::AddBlankRisk).unwrap();
        let before = store.snapshot();

        let result = store.dispatch(AuditCommand::RemoveRisk(index + 1));
        prop_assert!(result.is_err());
        prop_assert_eq!(store.state(), &before);
    }

    #[test]
    fn prop_repeated_calls_give_identical_output(
        edits in worksheet_edits(),
        dims in dimensions(),
        metric in proptest::sample::select(vec!["SPD", "EOD", "AOD", "DI", "Custom"]),
        value in -1.0f64..1.0,
    ) {
        let mut store = audit_store();
        for edit in edits {
            store.dispatch(edit).unwrap();
        }
        let state = store.state();

        prop_assert_eq!(build_c1_summary(state).render(), build_c1_summary(state).render());
        prop_assert_eq!(build_c2_summary(state).render(), build_c2_summary(state).render());
        prop_assert_eq!(build_c3_summary(state).render(), build_c3_summary(state).render());
        prop_assert_eq!(
            build_progressive_context(state, Component::C4).render(),
            build_progressive_context(state, Component::C4).render()
        );

        let weights = get_adaptive_weights(&state.c2.primary_selection.definition)
            .weights
            .as_overrides();
        prop_assert_eq!(
            calculate_weighted_score(&dims, Some(&weights)).to_bits(),
            calculate_weighted_score(&dims, Some(&weights)).to_bits()
        );
        prop_assert_eq!(
            interpret_metric(metric, value, "Group A", "Group B", 0.05),
            interpret_metric(metric, value, "Group A", "Group B", 0.05)
        );
    }
}
