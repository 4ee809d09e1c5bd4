//! Bundled datasets.

pub mod robodebt;

pub use robodebt::learn_state;
