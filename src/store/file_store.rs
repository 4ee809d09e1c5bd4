//! Audit persistence to a single JSON file.

use crate::error::Result;
use crate::io::{read_audit_file, write_audit_file};
use crate::model::AuditState;
use std::path::{Path, PathBuf};

/// Default file name in the working directory.
pub const DEFAULT_STATE_FILE: &str = "fairness-audit.json";

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// The saved audit, or a fresh blank one when nothing has been saved yet.
    pub fn load(&self) -> Result<AuditState> {
        if !self.path.exists() {
            log::debug!(
                "No saved audit at {}, starting a new one",
                self.path.display()
            );
            return Ok(AuditState::new_audit());
        }
        log::debug!("Loading audit from {}", self.path.display());
        read_audit_file(&self.path)
    }

    pub fn save(&self, state: &AuditState) -> Result<()> {
        log::debug!("Saving audit to {}", self.path.display());
        write_audit_file(&self.path, state, chrono::Utc::now())
    }
}
