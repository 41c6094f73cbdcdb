//! Findings and per-run report structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::module_item::{DeclarationKind, SourceSpan};

/// 1-based line and column of a byte offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Textual replacement instruction; never a tree mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    pub span: SourceSpan,
    pub replacement: String,
}

impl Fix {
    pub fn new(span: SourceSpan, replacement: impl Into<String>) -> Self {
        Self {
            span,
            replacement: replacement.into(),
        }
    }
}

/// One reported violation with its suggested fix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub rule_id: String,
    pub message_id: String,
    pub declaration_kind: DeclarationKind,
    /// The violating name
    pub name: String,
    pub message: String,
    /// Span of the whole declaration statement
    pub span: SourceSpan,
    pub start: Position,
    pub end: Position,
    pub fix: Fix,
}

/// Findings for a single source file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: PathBuf,
    pub findings: Vec<Finding>,
    /// Number of fixes written back (or that would be, in dry-run mode)
    pub fixes_applied: usize,
    /// Fixed source text, kept only in dry-run mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_source: Option<String>,
}

impl FileReport {
    pub fn new(path: impl Into<PathBuf>, findings: Vec<Finding>) -> Self {
        Self {
            path: path.into(),
            findings,
            fixes_applied: 0,
            fixed_source: None,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// A file that could not be analyzed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileError {
    pub path: PathBuf,
    pub message: String,
    pub severity: String,
}

/// Aggregate numbers for a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSummary {
    pub files_checked: usize,
    pub files_with_findings: usize,
    pub total_findings: usize,
    pub fixes_applied: usize,
    pub files_failed: usize,
}

/// Everything one CLI run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResults {
    pub files: Vec<FileReport>,
    pub errors: Vec<FileError>,
    pub summary: CheckSummary,
    pub checked_at: DateTime<Utc>,
}

impl CheckResults {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            errors: Vec::new(),
            summary: CheckSummary::default(),
            checked_at: Utc::now(),
        }
    }

    pub fn add_file(&mut self, report: FileReport) {
        self.files.push(report);
    }

    pub fn add_error(&mut self, error: FileError) {
        self.errors.push(error);
    }

    /// Sort by path and recompute the summary
    pub fn finalize(&mut self) {
        self.files.sort_by(|a, b| a.path.cmp(&b.path));
        self.errors.sort_by(|a, b| a.path.cmp(&b.path));

        self.summary = CheckSummary {
            files_checked: self.files.len(),
            files_with_findings: self.files.iter().filter(|f| !f.is_clean()).count(),
            total_findings: self.files.iter().map(|f| f.findings.len()).sum(),
            fixes_applied: self.files.iter().map(|f| f.fixes_applied).sum(),
            files_failed: self.errors.len(),
        };
    }

    pub fn has_findings(&self) -> bool {
        self.summary.total_findings > 0
    }
}

impl Default for CheckResults {
    fn default() -> Self {
        Self::new()
    }
}
