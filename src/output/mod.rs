//! Output formatting and writing functionality

mod formatters;
mod progress;
mod writers;

pub use self::progress::{create_progress_callback, ProgressReporter};
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::config::{OutputFormat, Settings, Severity};
use crate::models::finding::CheckResults;

/// Trait for different output formatters
pub trait Formatter {
    /// Format check results into a string
    fn format(&self, results: &CheckResults) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
    pub severity: Severity,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool, severity: Severity) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
            severity,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, results: &CheckResults) -> Result<String> {
        let label = formatters::severity_label(self.severity);
        let mut output = String::new();

        for report in &results.files {
            output.push_str(&formatters::format_report_text(
                report,
                label,
                self.use_colors,
                self.verbose,
            ));
        }

        // In quiet mode only the findings themselves are printed
        if self.quiet {
            return Ok(output);
        }

        for error in &results.errors {
            output.push_str(&formatters::format_file_error_text(error, self.use_colors));
        }

        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&formatters::format_summary_text(results, self.use_colors));

        Ok(output)
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, results: &CheckResults) -> Result<String> {
        formatters::format_results_json(results, self.pretty)
    }
}

/// Create a formatter for the configured output format
pub fn create_formatter(settings: &Settings) -> Box<dyn Formatter> {
    match settings.output_format {
        OutputFormat::Text => Box::new(TextFormatter::new(
            settings.use_colors,
            settings.verbose,
            settings.quiet,
            settings.severity,
        )),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
