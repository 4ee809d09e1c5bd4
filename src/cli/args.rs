use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::prompt::PromptKind;
use crate::formatting::ColorMode;
use crate::model::Component;

#[derive(Parser, Debug)]
#[command(name = "fairness-audit")]
#[command(about = "Scoring and progressive context for structured fairness audits", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Use the Robodebt case study instead of a saved audit
    #[arg(long, global = true, conflicts_with = "state")]
    pub learn: bool,

    /// Audit JSON file to read (defaults to ./fairness-audit.json, then the case study)
    #[arg(long, global = true, env = "FAIRNESS_AUDIT_STATE")]
    pub state: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Colour output; overrides the config file
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the progressive context passed to a component
    Context {
        /// Component to build context for (c1-c4)
        component: Component,

        /// Show the headed prior-findings view instead of raw context
        #[arg(long)]
        findings: bool,
    },

    /// Print one component's summary (c1-c4)
    Summary { component: Component },

    /// Score a risk from its three 1-5 ratings
    Risk {
        severity: f64,
        likelihood: f64,
        relevance: f64,
    },

    /// Weighted score for a bias source's five 1-5 ratings
    Bias {
        #[arg(long)]
        severity: f64,
        #[arg(long)]
        scope: f64,
        #[arg(long)]
        persistence: f64,
        #[arg(long = "historical-alignment")]
        historical_alignment: f64,
        #[arg(long)]
        feasibility: f64,

        /// Primary fairness definition (defaults to the loaded audit's)
        #[arg(long)]
        definition: Option<String>,
    },

    /// Show adaptive dimension weights
    Weights {
        /// Fairness definition; lists every profile when omitted
        definition: Option<String>,
    },

    /// Plain-language reading of a fairness metric
    Interpret {
        /// Metric name, e.g. SPD, FPR Difference, Error Rate
        metric: String,

        /// Metric value
        #[arg(allow_negative_numbers = true)]
        value: f64,

        #[arg(long = "group-a")]
        group_a: String,

        #[arg(long = "group-b")]
        group_b: String,

        /// Regulatory threshold (defaults to the configured one)
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Completion checklist per component
    Progress {
        /// Limit to one component
        component: Option<Component>,
    },

    /// Risk matrix and bias source inventory
    Matrix {
        /// Also list the metrics recommended by the bias inventory
        #[arg(long)]
        recommend: bool,
    },

    /// Render a review prompt filled from the loaded audit
    Prompt {
        #[arg(value_enum)]
        kind: PromptKind,
    },

    /// Write a blank audit file
    New {
        /// Audit name
        #[arg(long, default_value = "New Audit")]
        name: String,

        /// Destination (defaults to ./fairness-audit.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Force overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
