//! Data models shared by the rule engine and the CLI

pub mod config;
pub mod finding;
pub mod module_item;
pub mod options;

pub use config::{OutputFormat, PartialSettings, Settings, Severity};
pub use finding::{CheckResults, CheckSummary, FileError, FileReport, Finding, Fix, Position};
pub use module_item::{DeclarationKind, DeclarationSite, ExportSpecifier, ModuleItem, SourceSpan};
pub use options::{PartialRuleOptions, RuleOptions};
