//! Model-assisted review: prompt construction and response parsing.
//!
//! Provider calls are out of scope; callers pass the rendered progressive
//! context into a template and feed the reply back through [`response`].

pub mod prompts;
pub mod response;

pub use prompts::{PromptPair, METHODOLOGY_CONTEXT};
pub use response::{extract_numbered_items, extract_score, parse_markdown_sections, ParsedSection};
