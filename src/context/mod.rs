//! Cross-component context propagation.
//!
//! Later components see what earlier ones found through the progressive
//! context: one summary per upstream component, built from a read-only
//! [`AuditState`](crate::model::AuditState). Summaries are kept as typed
//! lines and rendered to the shared line-oriented text only when a prompt or
//! display needs it.

pub mod builder;
pub mod findings;
pub mod summarizers;
pub mod summary;

pub use builder::{build_progressive_context, ContextSection, ProgressiveContext, SectionSource};
pub use findings::{heading_component, parse_findings, FindingsLine, FindingsSection};
pub use summarizers::{build_c1_summary, build_c2_summary, build_c3_summary, build_summary};
pub use summary::{empty_sentinel, ComponentSummary, LineKind, SummaryLine};
