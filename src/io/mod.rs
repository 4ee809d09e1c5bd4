//! Audit JSON export and import.
//!
//! Exports are the state fields plus three export-only keys (`_format`,
//! `_version`, `_exportedAt`). Imports check shape only: any JSON that
//! deserializes into an [`AuditState`] is accepted, with missing component
//! fields taking their blank-worksheet defaults.

use crate::error::{AuditError, Result};
use crate::model::AuditState;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

pub const EXPORT_FORMAT: &str = "fairness-audit-playbook";

const EXPORT_ONLY_KEYS: [&str; 3] = ["_format", "_version", "_exportedAt"];

/// Pretty-printed export of `state`, stamped with `exported_at`.
pub fn export_audit_json(state: &AuditState, exported_at: DateTime<Utc>) -> Result<String> {
    let Value::Object(fields) = serde_json::to_value(state)? else {
        return Err(AuditError::InvalidImport(
            "audit state did not serialize to an object".to_string(),
        ));
    };

    let mut export = Map::new();
    export.insert("_format".to_string(), Value::from(EXPORT_FORMAT));
    export.insert("_version".to_string(), Value::from(state.metadata.version));
    export.insert(
        "_exportedAt".to_string(),
        Value::from(exported_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    export.extend(fields);

    log::debug!(
        "Exporting audit '{}' (version {})",
        state.metadata.name,
        state.metadata.version
    );
    Ok(serde_json::to_string_pretty(&Value::Object(export))?)
}

/// Parse an exported (or hand-written) audit. Syntax errors surface as
/// [`AuditError::Json`], shape errors as [`AuditError::InvalidImport`].
pub fn parse_audit_json(json: &str) -> Result<AuditState> {
    let mut value: Value = serde_json::from_str(json)?;
    let Some(object) = value.as_object_mut() else {
        return Err(AuditError::InvalidImport(
            "expected a JSON object at the top level".to_string(),
        ));
    };

    if let Some(format) = object.get("_format") {
        if format.as_str() != Some(EXPORT_FORMAT) {
            return Err(AuditError::InvalidImport(format!(
                "_format: expected \"{EXPORT_FORMAT}\", found {format}"
            )));
        }
    }
    if let Some(version) = object.get("_version") {
        if !version.is_number() {
            return Err(AuditError::InvalidImport(format!(
                "_version: expected a number, found {version}"
            )));
        }
    }
    for key in EXPORT_ONLY_KEYS {
        object.remove(key);
    }

    let state: AuditState =
        serde_json::from_value(value).map_err(|e| AuditError::InvalidImport(e.to_string()))?;
    log::debug!("Imported audit '{}'", state.metadata.name);
    Ok(state)
}

pub fn read_audit_file(path: &Path) -> Result<AuditState> {
    let content = fs::read_to_string(path).map_err(|e| AuditError::io(path, e))?;
    parse_audit_json(&content)
}

pub fn write_audit_file(path: &Path, state: &AuditState, exported_at: DateTime<Utc>) -> Result<()> {
    let json = export_audit_json(state, exported_at)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AuditError::io(parent, e))?;
    }
    fs::write(path, json).map_err(|e| AuditError::io(path, e))
}

/// Download-style file name: `fairness-audit-<name>-<date>.json`.
pub fn export_file_name(state: &AuditState, exported_at: DateTime<Utc>) -> String {
    let name = state
        .metadata
        .name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("fairness-audit-{name}-{}.json", exported_at.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AuditMode;
    use chrono::TimeZone;

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_export_carries_format_fields() {
        let state = AuditState::new_audit();
        let json = export_audit_json(&state, stamp()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["_format"], EXPORT_FORMAT);
        assert_eq!(value["_version"], 1);
        assert_eq!(value["_exportedAt"], "2024-03-01T09:30:00.000Z");
        assert_eq!(value["activeComponent"], "overview");
    }

    #[test]
    fn test_import_strips_export_fields() {
        let mut state = AuditState::new_audit();
        state.mode = AuditMode::Audit;
        let json = export_audit_json(&state, stamp()).unwrap();
        assert_eq!(parse_audit_json(&json).unwrap(), state);
    }

    #[test]
    fn test_syntax_error_is_json_error() {
        let err = parse_audit_json("{not json").unwrap_err();
        assert!(matches!(err, AuditError::Json(_)));
        assert!(err.to_string().starts_with("Invalid JSON format"));
    }

    #[test]
    fn test_wrong_format_literal_rejected() {
        let err = parse_audit_json(r#"{"_format":"other"}"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid audit file: _format"));
    }

    #[test]
    fn test_missing_metadata_rejected() {
        let err = parse_audit_json(r#"{"mode":"audit"}"#).unwrap_err();
        assert!(matches!(err, AuditError::InvalidImport(_)));
    }

    #[test]
    fn test_file_name_slug() {
        let mut state = AuditState::new_audit();
        state.metadata.name = "Benefit  Review Q1".into();
        assert_eq!(
            export_file_name(&state, stamp()),
            "fairness-audit-benefit-review-q1-2024-03-01.json"
        );
    }
}
