//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// required-exports - flag top-level declarations that are not exported
#[derive(Parser, Debug, Default)]
#[command(name = "required-exports")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Require exports for top-level declarations in JavaScript and TypeScript modules")]
#[command(long_about = "required-exports checks JavaScript and TypeScript modules for top-level declarations \
(variables, functions, classes, interfaces, type aliases and enums) that are not exported. \
Each finding carries a fix that prepends `export ` to the declaration; run with --fix to apply them.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Check the current directory
    required-exports

    # Check specific files or directories
    required-exports src lib/index.ts

    # Skip generated code (can specify multiple patterns)
    required-exports --exclude generated --exclude '*.config.js'

Rule Options:
    # Do not require exports for variables or type aliases
    required-exports --no-variable --no-type

    # Also require exports for underscore-prefixed names
    required-exports --check-private

    # Pass options in the lint configuration's JSON form
    required-exports --rule-options '[{\"enum\": false, \"ignorePrivate\": true}]'

    # Print the accepted options schema
    required-exports --print-schema

Fixing:
    # Prepend `export ` to every flagged declaration
    required-exports --fix

    # Show what would be fixed without touching files
    required-exports --fix-dry-run --format json

Output Options:
    # Output in JSON format
    required-exports --format json

    # Save results to a file
    required-exports --format json --output-file report.json

    # Report findings without failing the run
    required-exports --severity warn

Configuration:
    # Use a specific configuration file
    required-exports --config ./lint/required-exports.toml

    # Create a default configuration file
    required-exports --init
")]
pub struct Args {
    /// Files or directories to check
    #[arg(value_name = "PATH", help = "Files or directories to check (defaults to the current directory)")]
    pub paths: Vec<PathBuf>,

    /// Exclude files and directories matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob patterns for files or directories to skip (can be specified multiple times)")]
    pub exclude: Vec<String>,

    /// Maximum depth for directory traversal
    #[arg(long, value_name = "DEPTH", help = "Maximum directory depth to traverse")]
    pub max_depth: Option<usize>,

    /// Do not check variable declarations
    #[arg(long, help = "Do not require exports for variable declarations")]
    pub no_variable: bool,

    /// Do not check function declarations
    #[arg(long, help = "Do not require exports for function declarations")]
    pub no_function: bool,

    /// Do not check class declarations
    #[arg(long, help = "Do not require exports for class declarations")]
    pub no_class: bool,

    /// Do not check interface declarations
    #[arg(long, help = "Do not require exports for TypeScript interfaces")]
    pub no_interface: bool,

    /// Do not check type alias declarations
    #[arg(long, help = "Do not require exports for TypeScript type aliases")]
    pub no_type: bool,

    /// Do not check enum declarations
    #[arg(long, help = "Do not require exports for TypeScript enums")]
    pub no_enum: bool,

    /// Also check names starting with an underscore
    #[arg(long, help = "Require exports for underscore-prefixed names too (sets ignorePrivate to false)")]
    pub check_private: bool,

    /// Rule options as JSON
    #[arg(long, value_name = "JSON", help = "Rule options as a JSON object or a one-element array, e.g. '{\"function\": false}'")]
    pub rule_options: Option<String>,

    /// Rule severity
    #[arg(long, value_enum, help = "Rule severity: 'error' fails the run on findings, 'warn' only reports them, 'off' checks nothing")]
    pub severity: Option<SeverityArg>,

    /// Write fixes back to disk
    #[arg(long, conflicts_with = "fix_dry_run", help = "Prepend `export ` to flagged declarations and write the files back")]
    pub fix: bool,

    /// Compute fixes without writing them
    #[arg(long, help = "Compute fixes without writing them (the fixed source is included in JSON output)")]
    pub fix_dry_run: bool,

    /// Output format (text, json)
    #[arg(short, long, value_enum, help = "Output format: 'text' for humans, 'json' for machine processing")]
    pub format: Option<FormatArg>,

    /// Output file path (stdout if not specified)
    #[arg(short, long, value_name = "FILE", help = "File to write the report to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, help = "Only print findings, no progress or summary")]
    pub quiet: bool,

    /// Show debug information
    #[arg(short, long, help = "Show debug logging on stderr")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output (useful when piping output)")]
    pub no_colors: bool,

    /// Disable parallel processing
    #[arg(long, help = "Analyze files on a single thread")]
    pub no_parallel: bool,

    /// Disable progress bars
    #[arg(long, help = "Disable the progress bar (useful for CI environments)")]
    pub no_progress: bool,

    /// Follow symbolic links during directory traversal
    #[arg(long, help = "Follow symbolic links during directory traversal")]
    pub follow_links: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .required-exports.toml in the current or home directory)")]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.required-exports.toml) in the current directory")]
    pub init: bool,

    /// Print the rule options schema
    #[arg(long, help = "Print the JSON schema of the rule options and exit")]
    pub print_schema: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

/// Severity options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeverityArg {
    /// Rule disabled
    Off,
    /// Report without failing
    Warn,
    /// Fail on findings
    Error,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
