//! Validation of fully merged settings

use std::path::Path;

use crate::error::{Result, RuleError};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if settings.paths.is_empty() {
            return Err(RuleError::config_error("At least one path to check is required"));
        }

        for pattern in &settings.exclude_patterns {
            glob::Pattern::new(pattern).map_err(|e| {
                RuleError::config_error(format!("Invalid exclude pattern '{}': {}", pattern, e))
            })?;
        }

        if settings.max_depth == Some(0) {
            return Err(RuleError::config_error("Max depth must be at least 1"));
        }

        if settings.fix && settings.fix_dry_run {
            return Err(RuleError::config_error(
                "--fix and --fix-dry-run cannot be used together",
            ));
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// The output file's parent directory must exist
    fn validate_output_path(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
                Err(RuleError::InvalidPath {
                    path: parent.to_path_buf(),
                })
            }
            _ => Ok(()),
        }
    }
}
