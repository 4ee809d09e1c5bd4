pub mod terminal;

pub use terminal::*;

use crate::error::Result;
use serde::Serialize;

/// Pretty JSON for `--format json`.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
