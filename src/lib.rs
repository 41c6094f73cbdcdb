//! required-exports - require exports for top-level declarations
//!
//! Parses JavaScript and TypeScript modules, finds top-level variables,
//! functions, classes, interfaces, type aliases and enums that are not
//! exported, and reports each with a fix that prepends `export `.
//!
//! ```
//! use required_exports::{Analyzer, RuleOptions};
//! use std::path::Path;
//!
//! let analyzer = Analyzer::new(RuleOptions::default());
//! let findings = analyzer
//!     .check_source("const a = 1;\nexport { a };\nfunction b() {}", Path::new("mod.js"))
//!     .unwrap();
//!
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].message, "Declaration \"b\" must be exported");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{apply_fixes, Analyzer, ExportIndex, FixMode, RequiredExports, RuleMeta, Walker};
pub use error::{handle_error, ErrorSeverity, Result, ResultExt, RuleError};
pub use models::{
    config::Settings,
    finding::{CheckResults, FileReport, Finding},
    module_item::{DeclarationKind, ModuleItem},
    options::RuleOptions,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
