//! Source discovery and the check run over all discovered files
//!
//! Directory traversal with pattern-based exclusion and depth limiting,
//! followed by per-file analysis that never lets one bad file stop the run.

use glob::Pattern;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};
use walkdir::WalkDir;

use super::analyzer::{Analyzer, FixMode};
use super::parallel::{process_with_progress, ProgressUpdate};
use crate::error::{handle_error, Result, RuleError};
use crate::models::config::{Settings, Severity};
use crate::models::finding::{CheckResults, FileError};
use crate::parsers::is_checkable_source;

/// Main walker: finds source files and checks each of them
pub struct Walker {
    settings: Settings,
    exclude_patterns: Vec<Pattern>,
    analyzer: Analyzer,
}

impl Walker {
    /// Create a walker; fails if an exclude pattern does not compile
    pub fn new(settings: Settings) -> Result<Self> {
        let exclude_patterns = compile_exclude_patterns(&settings.exclude_patterns)?;
        let analyzer = Analyzer::new(settings.rule);

        Ok(Self {
            settings,
            exclude_patterns,
            analyzer,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn fix_mode(&self) -> FixMode {
        if self.settings.fix_dry_run {
            FixMode::DryRun
        } else if self.settings.fix {
            FixMode::Write
        } else {
            FixMode::Off
        }
    }

    /// Discover and check every source file under the configured paths
    pub fn check<P>(&self, progress: P) -> Result<CheckResults>
    where
        P: Fn(ProgressUpdate) + Send + Sync,
    {
        if self.settings.severity == Severity::Off {
            info!("rule severity is off; nothing to check");
            let mut results = CheckResults::new();
            results.finalize();
            return Ok(results);
        }

        let files = self.discover()?;
        self.check_files(files, progress)
    }

    /// Check an already discovered list of files
    pub fn check_files<P>(&self, files: Vec<PathBuf>, progress: P) -> Result<CheckResults>
    where
        P: Fn(ProgressUpdate) + Send + Sync,
    {
        let start_time = Instant::now();
        let mut results = CheckResults::new();

        if self.settings.severity == Severity::Off {
            results.finalize();
            return Ok(results);
        }

        info!(files = files.len(), "checking source files");

        let mode = self.fix_mode();
        let outcomes = process_with_progress(
            files,
            self.settings.parallel,
            |path| {
                let label = path.display().to_string();
                let outcome = self.analyzer.analyze_file(&path, mode);
                ((path, outcome), label)
            },
            progress,
        );

        for (path, outcome) in outcomes {
            match outcome {
                Ok(report) => results.add_file(report),
                Err(err) => {
                    let file_error = FileError {
                        path,
                        message: err.user_message(),
                        severity: err.severity().to_string(),
                    };
                    if let Some(critical) = handle_error(err) {
                        return Err(critical);
                    }
                    results.add_error(file_error);
                }
            }
        }

        results.finalize();
        debug!(elapsed_ms = start_time.elapsed().as_millis() as u64, "check finished");
        Ok(results)
    }

    /// All checkable files under the configured paths, sorted and deduplicated
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for root in &self.settings.paths {
            if !root.exists() {
                return Err(RuleError::InvalidPath { path: root.clone() });
            }

            if root.is_file() {
                if is_checkable_source(root) && !self.is_excluded(root) {
                    files.push(root.clone());
                } else {
                    debug!(path = %root.display(), "skipping explicit path");
                }
                continue;
            }

            self.walk_directory(root, &mut files);
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    fn walk_directory(&self, root: &Path, files: &mut Vec<PathBuf>) {
        let mut walker = WalkDir::new(root).follow_links(self.settings.follow_links);
        if let Some(depth) = self.settings.max_depth {
            walker = walker.max_depth(depth);
        }

        let entries = walker
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_excluded(entry.path()));

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
                    handle_error(RuleError::directory_traversal_error(&path, err.to_string()));
                    continue;
                }
            };

            if entry.file_type().is_file() && is_checkable_source(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }

    /// A path is excluded when a pattern matches its file name or the whole path
    pub fn is_excluded(&self, path: &Path) -> bool {
        let file_name = path.file_name().and_then(|name| name.to_str());
        self.exclude_patterns.iter().any(|pattern| {
            file_name.map(|name| pattern.matches(name)).unwrap_or(false) || pattern.matches_path(path)
        })
    }
}

fn compile_exclude_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| Pattern::new(pattern).map_err(RuleError::from))
        .collect()
}
