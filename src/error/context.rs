//! Error context utilities for required-exports
//!
//! Attaching file context to io errors and deciding whether a failure
//! should stop the run.

use std::path::Path;
use tracing::{error, warn};

use crate::error::{ErrorSeverity, Result, RuleError};

/// Extension trait for io results to add file context to errors
pub trait ResultExt<T> {
    /// Attach the path of the source file being read
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| match err.kind() {
            std::io::ErrorKind::PermissionDenied => RuleError::permission_denied(path.as_ref()),
            _ => RuleError::SourceRead {
                path: path.as_ref().to_path_buf(),
                source: err,
            },
        })
    }
}

/// Handle an error based on its severity
///
/// Warnings and errors are logged and swallowed; critical errors are handed
/// back to the caller.
pub fn handle_error(err: RuleError) -> Option<RuleError> {
    match err.severity() {
        ErrorSeverity::Warning => {
            warn!("{}", err.user_message());
            None
        }
        ErrorSeverity::Error => {
            error!("{}", err.user_message());
            None
        }
        ErrorSeverity::Critical => Some(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_with_file_context() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "file not found"));

        match result.with_file_context("src/lib.ts") {
            Err(RuleError::SourceRead { path, source }) => {
                assert_eq!(path.to_string_lossy(), "src/lib.ts");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Expected SourceRead error, got {:?}", other),
        }
    }

    #[test]
    fn test_with_file_context_permission_denied() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));

        assert!(matches!(
            result.with_file_context("src/lib.ts"),
            Err(RuleError::PermissionDenied { .. })
        ));
    }

    #[test]
    fn test_handle_error_swallows_below_critical() {
        assert!(handle_error(RuleError::permission_denied("locked.ts")).is_none());
        assert!(handle_error(RuleError::directory_traversal_error("src", "loop")).is_none());
        assert!(handle_error(RuleError::config_error("bad")).is_some());
    }
}
