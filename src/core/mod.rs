//! Rule engine and the machinery that runs it over files

pub mod analyzer;
pub mod auditor;
pub mod export_index;
pub mod fix;
pub mod parallel;
pub mod privacy;
pub mod rule;
pub mod walker;

pub use analyzer::{Analyzer, FixMode};
pub use auditor::{DeclarationAuditor, Verdict, Violation};
pub use export_index::ExportIndex;
pub use fix::{apply_fixes, fix_until_stable, FixOutcome};
pub use privacy::{NamePrefix, PrivacyPredicate};
pub use rule::{RequiredExports, RuleMeta};
pub use walker::Walker;
