//! Error handling for required-exports
//!
//! Error types, the crate result alias and error context utilities.

pub mod context;
pub mod types;

pub use context::{handle_error, ResultExt};
pub use types::{ErrorSeverity, Result, RuleError};
