//! Which audit a command reads.
//!
//! `--learn` always selects the case study and `--state FILE` always selects
//! that file. Without either, `./fairness-audit.json` is used when it exists
//! and the case study otherwise.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::GlobalArgs;
use crate::config::AuditConfig;
use crate::store::file_store::DEFAULT_STATE_FILE;
use crate::store::{AuditStore, FileStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateSource {
    Learn,
    File(PathBuf),
}

impl StateSource {
    pub fn resolve(global: &GlobalArgs, working_dir: &Path) -> Self {
        if global.learn {
            return StateSource::Learn;
        }
        if let Some(path) = &global.state {
            return StateSource::File(path.clone());
        }
        let default = working_dir.join(DEFAULT_STATE_FILE);
        if default.exists() {
            StateSource::File(default)
        } else {
            StateSource::Learn
        }
    }

    /// Load the selected audit under the configured classification bands.
    pub fn open(&self, config: &AuditConfig) -> Result<AuditStore> {
        let store = match self {
            StateSource::Learn => {
                tracing::debug!("Using the Robodebt case study");
                AuditStore::learn()
            }
            StateSource::File(path) => {
                let state = FileStore::new(path)
                    .load()
                    .with_context(|| format!("Failed to load audit from {}", path.display()))?;
                AuditStore::new(state)
            }
        };
        Ok(store.with_thresholds(config.thresholds.risk, config.thresholds.bias))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::model::AuditMode;
    use tempfile::TempDir;

    fn global(learn: bool, state: Option<PathBuf>) -> GlobalArgs {
        GlobalArgs {
            learn,
            state,
            format: OutputFormat::Text,
            color: None,
            verbosity: 0,
        }
    }

    #[test]
    fn test_falls_back_to_case_study() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            StateSource::resolve(&global(false, None), dir.path()),
            StateSource::Learn
        );
    }

    #[test]
    fn test_default_file_is_picked_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_STATE_FILE);
        FileStore::new(&path)
            .save(&AuditStore::new_audit().into_state())
            .unwrap();

        let source = StateSource::resolve(&global(false, None), dir.path());
        assert_eq!(source, StateSource::File(path));
        let store = source.open(&AuditConfig::default()).unwrap();
        assert_eq!(store.state().mode, AuditMode::Audit);
    }

    #[test]
    fn test_learn_flag_wins_over_default_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(DEFAULT_STATE_FILE), "{}").unwrap();
        let source = StateSource::resolve(&global(true, None), dir.path());
        assert_eq!(source, StateSource::Learn);
        assert!(source.open(&AuditConfig::default()).unwrap().is_read_only());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();
        let err = StateSource::File(path)
            .open(&AuditConfig::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }
}
