use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::AuditConfig;
use crate::error::Result;

pub const CONFIG_FILE_NAME: &str = ".fairness-audit.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML string and validate the result
pub fn parse_and_validate_config(contents: &str) -> Result<AuditConfig> {
    let config = toml::from_str::<AuditConfig>(contents)?;
    config.validate()?;
    Ok(config)
}

/// Try loading config from a specific path; `None` when missing or invalid
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<AuditConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} in {}. Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its ancestors, nearest first, at most `max_depth` of them
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Nearest `.fairness-audit.toml` at or above `start`, or defaults
pub fn load_config_from(start: PathBuf) -> AuditConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            AuditConfig::default()
        })
}

pub fn load_config() -> AuditConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            AuditConfig::default()
        }
    }
}

/// Commented default configuration written by `fairness-audit init`
pub fn default_config_toml() -> &'static str {
    r#"# fairness-audit configuration

# Risk matrix bands (score = severity x likelihood x relevance, 1-125)
[thresholds.risk]
critical = 90.0
elevated = 40.0
moderate = 15.0

# Bias source priority bands (weighted score, 1-5)
[thresholds.bias]
high = 3.5
medium = 2.5

[metrics]
# Regulatory threshold for metric interpretation
default_threshold = 0.05

[output]
# auto, always or never
color = "auto"
"#
}
