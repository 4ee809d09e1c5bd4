//! CLI command implementations.
//!
//! Handlers return the text to print so they can be exercised without a
//! terminal; [`run`] writes it to stdout.
//!
//! Available commands:
//! - **context** / **summary**: progressive context and component summaries
//! - **risk** / **bias** / **weights** / **interpret**: one-off calculations
//! - **progress** / **matrix**: views over a whole worksheet
//! - **prompt**: review prompts filled from a worksheet
//! - **new**: write a blank audit file
//! - **init**: write a default `.fairness-audit.toml`

pub mod context;
pub mod init;
pub mod new;
pub mod prompt;
pub mod scoring;
pub mod state;
pub mod worksheet;

pub use context::{handle_context, handle_summary};
pub use init::init_config;
pub use new::handle_new;
pub use prompt::{handle_prompt, PromptKind};
pub use scoring::{handle_bias, handle_interpret, handle_risk, handle_weights, InterpretArgs};
pub use state::StateSource;
pub use worksheet::{handle_matrix, handle_progress};

use anyhow::Result;

use crate::cli::{Cli, Commands, GlobalArgs};
use crate::config::AuditConfig;
use crate::model::BiasDimensions;
use crate::store::AuditStore;

fn open_store(global: &GlobalArgs, config: &AuditConfig) -> Result<AuditStore> {
    let working_dir = std::env::current_dir()?;
    StateSource::resolve(global, &working_dir).open(config)
}

/// Run one parsed invocation against an already loaded configuration.
pub fn run(cli: Cli, config: &AuditConfig) -> Result<()> {
    let global = cli.global;
    let format = global.format;

    let output = match cli.command {
        Commands::Context {
            component,
            findings,
        } => handle_context(open_store(&global, config)?.state(), component, findings, format)?,
        Commands::Summary { component } => {
            handle_summary(open_store(&global, config)?.state(), component, format)?
        }
        Commands::Risk {
            severity,
            likelihood,
            relevance,
        } => handle_risk(severity, likelihood, relevance, config, format)?,
        Commands::Bias {
            severity,
            scope,
            persistence,
            historical_alignment,
            feasibility,
            definition,
        } => {
            let definition = match definition {
                Some(d) => d,
                None => open_store(&global, config)?
                    .state()
                    .primary_definition()
                    .to_string(),
            };
            let dimensions = BiasDimensions {
                severity,
                scope,
                persistence,
                historical_alignment,
                feasibility,
            };
            handle_bias(dimensions, &definition, config, format)?
        }
        Commands::Weights { definition } => handle_weights(definition.as_deref(), format)?,
        Commands::Interpret {
            metric,
            value,
            group_a,
            group_b,
            threshold,
        } => handle_interpret(
            InterpretArgs {
                metric: &metric,
                value,
                group_a: &group_a,
                group_b: &group_b,
                threshold,
            },
            config,
            format,
        )?,
        Commands::Progress { component } => {
            handle_progress(open_store(&global, config)?.state(), component, format)?
        }
        Commands::Matrix { recommend } => {
            handle_matrix(open_store(&global, config)?.state(), recommend, format)?
        }
        Commands::Prompt { kind } => {
            handle_prompt(open_store(&global, config)?.state(), kind, format)?
        }
        Commands::New {
            name,
            output,
            force,
        } => {
            let path = handle_new(&name, output.as_deref(), force)?;
            format!("Created audit '{}' at {}\n", name, path.display())
        }
        Commands::Init { force } => {
            init_config(force)?;
            return Ok(());
        }
    };

    print!("{output}");
    Ok(())
}
