//! Error types and definitions for required-exports
//!
//! The rule engine itself is total over well-formed input and never fails;
//! every error here originates at a boundary: configuration, file access,
//! parsing or report output.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current file fails but the run can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for required-exports operations
#[derive(Debug, Error)]
pub enum RuleError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Rule options failed schema validation
    #[error("Invalid rule options: {message}")]
    InvalidRuleOptions { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// TOML parsing errors without file context
    #[error("TOML parsing error: {source}")]
    TomlParse {
        #[source]
        source: toml::de::Error,
    },

    /// TOML serialization errors
    #[error("TOML serialization error: {source}")]
    TomlSerialize {
        #[source]
        source: toml::ser::Error,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Source file read errors
    #[error("Error reading source file {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is not a JavaScript or TypeScript source
    #[error("Unsupported source type: {path}")]
    UnsupportedSourceType { path: PathBuf },

    /// The parser reported syntax errors
    #[error("Failed to parse {path}: {}", .errors.join("; "))]
    Parse { path: PathBuf, errors: Vec<String> },

    /// Writing fixed source back to disk failed
    #[error("Error writing fixes to {path}: {source}")]
    FixWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal { path: PathBuf, message: String },

    /// Invalid output format
    #[error("Invalid output format: {format}")]
    InvalidOutputFormat { format: String },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization or deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

impl RuleError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A single unreadable or unparsable file does not stop the run
            RuleError::PermissionDenied { .. } => ErrorSeverity::Warning,
            RuleError::UnsupportedSourceType { .. } => ErrorSeverity::Warning,
            RuleError::Parse { .. } => ErrorSeverity::Warning,

            RuleError::Config { .. } => ErrorSeverity::Critical,
            RuleError::InvalidRuleOptions { .. } => ErrorSeverity::Critical,
            RuleError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            RuleError::ConfigRead { .. } => ErrorSeverity::Critical,
            RuleError::ConfigParse { .. } => ErrorSeverity::Critical,
            RuleError::GlobPattern { .. } => ErrorSeverity::Critical,
            RuleError::InvalidOutputFormat { .. } => ErrorSeverity::Critical,
            RuleError::OutputWrite { .. } => ErrorSeverity::Critical,
            RuleError::StdoutWrite { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            RuleError::PermissionDenied { path } => {
                format!("Cannot access '{}' due to permission denied. Check file permissions.", path.display())
            }
            RuleError::InvalidPath { path } => {
                format!("Invalid path: '{}'. Please provide an existing file or directory.", path.display())
            }
            RuleError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'. Create it with --init or drop the --config option.", path.display())
            }
            RuleError::InvalidRuleOptions { message } => {
                format!("Invalid rule options: {}. Allowed keys are variable, function, class, interface, type, enum and ignorePrivate, all booleans.", message)
            }
            RuleError::Parse { path, errors } => {
                format!("Could not parse '{}' ({} syntax error(s)). Skipping file.", path.display(), errors.len())
            }
            RuleError::UnsupportedSourceType { path } => {
                format!("'{}' is not a JavaScript or TypeScript source file. Skipping file.", path.display())
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Optional hint printed after the error message
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            RuleError::ConfigParse { .. } | RuleError::InvalidRuleOptions { .. } => {
                Some("Run with --print-schema to see the accepted rule options")
            }
            RuleError::InvalidPath { .. } => Some("Check that the path exists and is accessible"),
            RuleError::OutputWrite { .. } => {
                Some("Create the output directory first or specify a different path")
            }
            _ => None,
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        RuleError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        RuleError::Config {
            message: message.into(),
        }
    }

    /// Create a rule options validation error
    pub fn invalid_options(message: impl Into<String>) -> Self {
        RuleError::InvalidRuleOptions {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        RuleError::PermissionDenied { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        RuleError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for RuleError {
    fn from(err: std::io::Error) -> Self {
        RuleError::io_error(err)
    }
}

impl From<toml::de::Error> for RuleError {
    fn from(err: toml::de::Error) -> Self {
        RuleError::TomlParse { source: err }
    }
}

impl From<toml::ser::Error> for RuleError {
    fn from(err: toml::ser::Error) -> Self {
        RuleError::TomlSerialize { source: err }
    }
}

impl From<glob::PatternError> for RuleError {
    fn from(err: glob::PatternError) -> Self {
        RuleError::GlobPattern { source: err }
    }
}

impl From<serde_json::Error> for RuleError {
    fn from(err: serde_json::Error) -> Self {
        RuleError::Json { source: err }
    }
}

/// Result type alias for required-exports operations
pub type Result<T> = std::result::Result<T, RuleError>;
