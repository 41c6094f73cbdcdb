//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, RuleError};
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".required-exports.toml";

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(RuleError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| RuleError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
///
/// Unknown keys, at the top level or in the `[rule]` table, are rejected.
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|e| RuleError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_partial_settings(&settings, path)?;
    debug!(path = %path.display(), "parsed configuration file");

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(paths) = &settings.paths {
        if paths.iter().any(|p| p.as_os_str().is_empty()) {
            return Err(RuleError::config_error(format!(
                "Invalid empty entry in paths in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(patterns) = &settings.exclude_patterns {
        for pattern in patterns {
            if pattern.is_empty() {
                return Err(RuleError::config_error(format!(
                    "Empty exclude pattern in config file: {}",
                    path.display()
                )));
            }

            glob::Pattern::new(pattern).map_err(|e| {
                RuleError::config_error(format!(
                    "Invalid exclude pattern '{}' in config file: {}: {}",
                    pattern,
                    path.display(),
                    e
                ))
            })?;
        }
    }

    if settings.max_depth == Some(0) {
        return Err(RuleError::config_error(format!(
            "Invalid max_depth 0 in config file: {}. Must be at least 1.",
            path.display()
        )));
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(RuleError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    let mut candidates = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];

    if let Some(home_dir) = dirs::home_dir() {
        candidates.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }

    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("required-exports").join("config.toml"));
    }

    find_config_in(&candidates)
}

/// Load the first existing file among `candidates`
pub fn find_config_in(candidates: &[PathBuf]) -> Result<Option<PartialSettings>> {
    for candidate in candidates {
        if candidate.is_file() {
            return parse_config_file(candidate).map(Some);
        }
    }
    Ok(None)
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, default_config_template())?;
    Ok(())
}

/// The commented default configuration written by `--init`
pub fn default_config_template() -> &'static str {
    include_str!("default_config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::{OutputFormat, Severity};
    use tempfile::tempdir;

    #[test]
    fn test_parse_config_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("test_config.toml");

        let config_content = r#"
            paths = ["src", "lib"]
            exclude_patterns = ["node_modules", "dist"]
            max_depth = 5
            output_format = "json"
            severity = "warn"
            parallel = false

            [rule]
            variable = false
            ignorePrivate = false
        "#;

        fs::write(&config_path, config_content).unwrap();

        let settings = parse_config_file(&config_path).unwrap();

        assert_eq!(settings.paths, Some(vec![PathBuf::from("src"), PathBuf::from("lib")]));
        assert_eq!(settings.exclude_patterns, Some(vec!["node_modules".to_string(), "dist".to_string()]));
        assert_eq!(settings.max_depth, Some(5));
        assert_eq!(settings.output_format, Some(OutputFormat::Json));
        assert_eq!(settings.severity, Some(Severity::Warn));
        assert_eq!(settings.rule.variable, Some(false));
        assert_eq!(settings.rule.ignore_private, Some(false));
        assert_eq!(settings.rule.class, None);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = parse_config_content("scan_path = \"/x\"", "a.toml").unwrap_err();
        assert!(matches!(err, RuleError::ConfigParse { .. }));

        let err = parse_config_content("[rule]\nnamespace = true\n", "a.toml").unwrap_err();
        assert!(matches!(err, RuleError::ConfigParse { .. }));

        let err = parse_config_content("[rule]\nvariable = \"yes\"\n", "a.toml").unwrap_err();
        assert!(matches!(err, RuleError::ConfigParse { .. }));
    }

    #[test]
    fn test_validate_partial_settings() {
        let valid_settings = PartialSettings {
            paths: Some(vec![PathBuf::from("src")]),
            exclude_patterns: Some(vec!["node_modules".to_string()]),
            max_depth: Some(5),
            ..Default::default()
        };
        assert!(validate_partial_settings(&valid_settings, "test.toml").is_ok());

        let invalid_depth = PartialSettings {
            max_depth: Some(0),
            ..Default::default()
        };
        assert!(validate_partial_settings(&invalid_depth, "test.toml").is_err());

        let invalid_pattern = PartialSettings {
            exclude_patterns: Some(vec!["".to_string()]),
            ..Default::default()
        };
        assert!(validate_partial_settings(&invalid_pattern, "test.toml").is_err());
    }

    #[test]
    fn test_create_default_config_round_trips() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join(DEFAULT_CONFIG_FILE);

        create_default_config(&config_path).unwrap();
        let settings = parse_config_file(&config_path).unwrap();

        assert!(settings.paths.is_none());
        assert_eq!(settings.severity, Some(Severity::Error));
        assert_eq!(settings.rule.resolve(), crate::models::options::RuleOptions::default());
    }

    #[test]
    fn test_find_config_in_first_existing() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        let present = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&present, "max_depth = 3\n").unwrap();

        let found = find_config_in(&[missing.clone(), present]).unwrap().unwrap();
        assert_eq!(found.max_depth, Some(3));

        assert!(find_config_in(&[missing]).unwrap().is_none());
    }
}
