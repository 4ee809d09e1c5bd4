//! Scoring and progressive-context engine for structured fairness audits.
//!
//! An audit moves through four components: historical context and risk
//! identification, fairness definition selection, bias source
//! identification, and fairness metrics. Each component's findings are
//! summarised and carried forward as context for the components after it.

pub mod bias;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod context;
pub mod data;
pub mod error;
pub mod formatting;
pub mod io;
pub mod llm;
pub mod metrics;
pub mod model;
pub mod output;
pub mod progress;
pub mod risk;
pub mod store;

pub use crate::bias::{calculate_weighted_score, classify_bias_priority, get_adaptive_weights};
pub use crate::context::{build_progressive_context, build_summary, parse_findings};
pub use crate::error::{AuditError, Result};
pub use crate::metrics::interpret_metric;
pub use crate::model::{AuditState, Component};
pub use crate::risk::{calculate_risk_score, classify_risk, create_risk_entry};
pub use crate::store::{AuditCommand, AuditStore};
