// Shared fixtures for fairness-audit integration tests
#![allow(dead_code)]

use fairness_audit::model::{
    AuditMode, DefinitionSelection, DomainContext, ProtectedGroup, StepAnswer,
};
use fairness_audit::risk::create_risk_entry;
use fairness_audit::store::{AuditCommand, AuditStore, FileStore};
use fairness_audit::AuditState;
use std::path::{Path, PathBuf};

/// Fixed edit time so exports are reproducible.
pub const EDIT_TIME: i64 = 1_700_000_000_000;

pub fn editable_store() -> AuditStore {
    let mut store = AuditStore::new_audit();
    assert_eq!(store.state().mode, AuditMode::Audit);
    store
        .dispatch_at(AuditCommand::SetActiveComponent("c1".into()), EDIT_TIME)
        .unwrap();
    store
}

/// A small worksheet with Components 1 and 2 partly filled in.
pub fn sample_store() -> AuditStore {
    let mut store = editable_store();
    let commands = vec![
        AuditCommand::UpdateDomainContext(DomainContext {
            system: "Payment review".into(),
            decision_type: "Debt recovery".into(),
            affected_population: "Welfare recipients".into(),
            ..Default::default()
        }),
        AuditCommand::AddRisk(create_risk_entry("R1", "Income averaging", 5.0, 5.0, 5.0)),
        AuditCommand::AddRisk(create_risk_entry("R2", "Opaque letters", 2.0, 2.0, 2.0)),
        AuditCommand::AddProtectedGroup(ProtectedGroup {
            group: "Indigenous Australians".into(),
            ..Default::default()
        }),
        AuditCommand::AddProtectedGroup(ProtectedGroup {
            group: "Young people".into(),
            ..Default::default()
        }),
        AuditCommand::AnswerDecisionStep {
            index: 0,
            answer: StepAnswer::Single("Low".into()),
            explanation: None,
        },
        AuditCommand::UpdatePrimarySelection(DefinitionSelection {
            definition: "Equalized Odds".into(),
            justification: "Labels are unreliable".into(),
        }),
    ];
    for command in commands {
        store.dispatch_at(command, EDIT_TIME).unwrap();
    }
    store
}

pub fn sample_state() -> AuditState {
    sample_store().into_state()
}

/// Save `state` as `file_name` inside `dir`.
pub fn write_audit(dir: &Path, file_name: &str, state: &AuditState) -> PathBuf {
    let path = dir.join(file_name);
    FileStore::new(&path).save(state).unwrap();
    path
}
