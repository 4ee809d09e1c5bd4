//! Configuration: `.fairness-audit.toml` discovery, parsing and validation.

mod core;
mod loader;

pub use self::core::{AuditConfig, MetricsConfig, OutputConfig, ThresholdsConfig};
pub use loader::{
    default_config_toml, directory_ancestors, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
