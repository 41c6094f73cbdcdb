//! Per-file analysis: read, parse, check and optionally fix one source

use oxc_span::SourceType;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::fix::{fix_until_stable, FixOutcome};
use super::rule::RequiredExports;
use crate::error::{Result, ResultExt, RuleError};
use crate::models::finding::{FileReport, Finding};
use crate::models::options::RuleOptions;
use crate::parsers::SourceParser;

/// What to do with the fixes of a file's findings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixMode {
    /// Report findings only
    Off,
    /// Compute the fixed text and keep it in the report
    DryRun,
    /// Write the fixed text back to disk
    Write,
}

/// Runs the rule over source files
///
/// Shareable across threads: the parser pools allocators and the rule keeps
/// no per-file state.
pub struct Analyzer {
    rule: RequiredExports,
    parser: SourceParser,
}

impl Analyzer {
    pub fn new(options: RuleOptions) -> Self {
        Self::with_rule(RequiredExports::new(options))
    }

    pub fn with_rule(rule: RequiredExports) -> Self {
        Self {
            rule,
            parser: SourceParser::new(),
        }
    }

    pub fn rule(&self) -> &RequiredExports {
        &self.rule
    }

    /// Check source text, picking the source type from `path`
    pub fn check_source(&self, source: &str, path: &Path) -> Result<Vec<Finding>> {
        let source_type = SourceParser::source_type_for(path)?;
        self.check_source_as(source, source_type, path)
    }

    /// Check source text with an explicit source type
    pub fn check_source_as(
        &self,
        source: &str,
        source_type: SourceType,
        path: &Path,
    ) -> Result<Vec<Finding>> {
        let items = self.parser.parse_items(source, source_type, path)?;
        Ok(self.rule.check(&items, source))
    }

    /// Apply fixes until the source is stable
    pub fn fix_source(&self, source: &str, path: &Path) -> Result<FixOutcome> {
        let source_type = SourceParser::source_type_for(path)?;
        fix_until_stable(source, |text| self.check_source_as(text, source_type, path))
    }

    /// Analyze one file on disk
    pub fn analyze_file(&self, path: &Path, mode: FixMode) -> Result<FileReport> {
        let source = fs::read_to_string(path).with_file_context(path)?;

        if mode == FixMode::Off {
            let findings = self.check_source(&source, path)?;
            debug!(path = %path.display(), findings = findings.len(), "checked file");
            return Ok(FileReport::new(path, findings));
        }

        let outcome = self.fix_source(&source, path)?;
        let mut report = FileReport::new(path, outcome.remaining.clone());
        report.fixes_applied = outcome.applied;

        match mode {
            FixMode::Write if outcome.changed() => {
                fs::write(path, &outcome.output).map_err(|e| RuleError::FixWrite {
                    path: path.to_path_buf(),
                    source: e,
                })?;
                info!(path = %path.display(), fixes = outcome.applied, "wrote fixes");
            }
            FixMode::DryRun if outcome.changed() => {
                report.fixed_source = Some(outcome.output);
            }
            _ => {}
        }

        Ok(report)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(RuleOptions::default())
    }
}
