//! CLI command implementations.

pub mod search;

pub use search::{SearchCommand, SearchKind};
