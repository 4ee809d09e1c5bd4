//! Runtime setup for the binary: logging and colour.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::AuditConfig;
use crate::formatting::{ColorMode, FormattingConfig};

/// Filter directive for a `-v` count.
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v` when set.
/// `log` records from the library are bridged into the same subscriber.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbosity)));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    if let Err(e) = tracing_subscriber::registry().with(stderr_layer).try_init() {
        eprintln!("Note: logging already initialised: {e}");
    }
}

/// Colour mode from `--color`, then the config file, then the environment.
pub fn resolve_formatting(flag: Option<ColorMode>, config: &AuditConfig) -> FormattingConfig {
    match flag {
        Some(mode) => FormattingConfig::new(mode),
        None => FormattingConfig::from_env(config.output.color_mode()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(verbosity_filter(0), "warn");
        assert_eq!(verbosity_filter(2), "debug");
        assert_eq!(verbosity_filter(9), "trace");
    }

    #[test]
    fn test_color_flag_overrides_config() {
        let formatting = resolve_formatting(Some(ColorMode::Never), &AuditConfig::default());
        assert_eq!(formatting.color, ColorMode::Never);
    }
}
