//! Command implementations

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use super::Args;
use crate::config::{load_config, CliArgs, DEFAULT_CONFIG_FILE};
use crate::core::{RuleMeta, Walker};
use crate::error::{ErrorSeverity, Result, RuleError};
use crate::models::config::{Settings, Severity};
use crate::models::finding::CheckResults;
use crate::models::options::RuleOptions;
use crate::output::{create_formatter, create_progress_callback, create_writer, ProgressReporter};

/// Exit code for a clean run or findings at warn severity
pub const EXIT_OK: i32 = 0;
/// Exit code for findings at error severity
pub const EXIT_FINDINGS: i32 = 1;
/// Exit code for critical errors (configuration, output)
pub const EXIT_CRITICAL: i32 = 2;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Check source files
    Check(Box<Args>),
    /// Initialize a default configuration file
    Init,
    /// Print the rule metadata and options schema
    PrintSchema,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            Command::Init
        } else if args.print_schema {
            Command::PrintSchema
        } else {
            Command::Check(Box::new(args))
        }
    }

    /// Execute the command and return the process exit code
    pub fn execute(&self) -> Result<i32> {
        match self {
            Command::Check(args) => {
                let settings = load_config(CliArgs::from_args(args))?;
                debug!(?settings, "resolved settings");

                let results = run_check(&settings)?;

                let formatter = create_formatter(&settings);
                let writer = create_writer(settings.output_file.as_ref());
                writer.write(&formatter.format(&results)?)?;

                Ok(exit_code(&results, settings.severity))
            }
            Command::Init => {
                let config_path = Path::new(DEFAULT_CONFIG_FILE);
                if init_config(config_path)? {
                    println!("Created default configuration file at: {}", config_path.display());
                } else {
                    println!("Configuration file already exists at: {}", config_path.display());
                    println!("To overwrite it, delete the file first and run this command again.");
                }
                Ok(EXIT_OK)
            }
            Command::PrintSchema => {
                println!("{}", schema_document()?);
                Ok(EXIT_OK)
            }
        }
    }

    /// Run the command and handle errors
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(code) => code,
            Err(err) => {
                eprintln!("Error: {}", err.user_message());
                if let Some(suggestion) = err.suggestion() {
                    eprintln!("Suggestion: {}", suggestion);
                }

                match err.severity() {
                    ErrorSeverity::Warning | ErrorSeverity::Error => EXIT_FINDINGS,
                    ErrorSeverity::Critical => EXIT_CRITICAL,
                }
            }
        }
    }
}

/// Check every configured path, drawing a progress bar when enabled
pub fn run_check(settings: &Settings) -> Result<CheckResults> {
    let walker = Walker::new(settings.clone())?;

    if settings.severity == Severity::Off {
        return walker.check(|_| {});
    }

    let mut reporter = ProgressReporter::new(settings.show_progress && !settings.quiet);
    let files = walker.discover()?;
    reporter.start(files.len(), "Checking files");

    let reporter = Arc::new(reporter);
    let results = walker.check_files(files, create_progress_callback(reporter.clone()));
    reporter.finish();

    let results = results?;
    info!(
        files = results.summary.files_checked,
        findings = results.summary.total_findings,
        "check complete"
    );
    Ok(results)
}

/// Map results to an exit code under the given severity
pub fn exit_code(results: &CheckResults, severity: Severity) -> i32 {
    match severity {
        Severity::Error if results.has_findings() => EXIT_FINDINGS,
        _ => EXIT_OK,
    }
}

/// Write the default configuration file unless one already exists
///
/// Returns whether a file was written.
pub fn init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    crate::config::create_default_config(path)?;
    Ok(true)
}

/// Rule metadata, recommended preset and default options as one JSON document
pub fn schema_document() -> Result<String> {
    let document = serde_json::json!({
        "meta": RuleMeta::new(),
        "recommended": RuleMeta::recommended_config(),
        "defaultOptions": [RuleOptions::default()],
    });
    serde_json::to_string_pretty(&document).map_err(RuleError::from)
}
