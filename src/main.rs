use anyhow::Result;
use fairness_audit::cli::{self, Cli};
use fairness_audit::commands;
use fairness_audit::config::load_config;

fn main() -> Result<()> {
    let cli: Cli = cli::parse_args();
    cli::init_tracing(cli.global.verbosity);

    let config = load_config();
    cli::resolve_formatting(cli.global.color, &config).apply();

    commands::run(cli, &config)
}
