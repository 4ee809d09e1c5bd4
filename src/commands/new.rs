use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::store::file_store::DEFAULT_STATE_FILE;
use crate::store::{AuditCommand, AuditStore, FileStore};

/// Write a blank audit-mode worksheet named `name` to `output`.
pub fn handle_new(name: &str, output: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE));
    let _span = tracing::info_span!("new", path = %path.display()).entered();

    let file_store = FileStore::new(&path);
    if file_store.exists() && !force {
        anyhow::bail!(
            "Audit file {} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    let mut store = AuditStore::new_audit();
    store.dispatch(AuditCommand::UpdateAuditor {
        name: Some(name.to_string()),
        auditor_name: None,
        auditor_role: None,
        auditor_organization: None,
    })?;
    file_store
        .save(store.state())
        .with_context(|| format!("Failed to save new audit to {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AuditMode;
    use tempfile::TempDir;

    #[test]
    fn test_new_audit_round_trips() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("audits").join("benefits.json");
        let path = handle_new("Benefits review", Some(target.as_path()), false).unwrap();

        let state = FileStore::new(&path).load().unwrap();
        assert_eq!(state.metadata.name, "Benefits review");
        assert_eq!(state.mode, AuditMode::Audit);
        assert!(state.c1.risk_matrix.is_empty());
    }

    #[test]
    fn test_existing_file_needs_force() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("audit.json");
        handle_new("First", Some(target.as_path()), false).unwrap();
        assert!(handle_new("Second", Some(target.as_path()), false).is_err());
        handle_new("Second", Some(target.as_path()), true).unwrap();
        assert_eq!(FileStore::new(&target).load().unwrap().metadata.name, "Second");
    }
}
