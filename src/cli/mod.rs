//! Command-line interface for fairness-audit
//!
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, Commands, GlobalArgs, OutputFormat};
pub use setup::{init_tracing, resolve_formatting, verbosity_filter};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
