use crate::config::{default_config_toml, CONFIG_FILE_NAME};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn init_config(force: bool) -> Result<()> {
    let config_path = init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", config_path.display());
    Ok(())
}

/// Write the default configuration into `dir`.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    std::fs::write(&config_path, default_config_toml())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!(path = %config_path.display(), "Wrote default configuration");

    Ok(config_path)
}
