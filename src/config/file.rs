//! File and environment configuration sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{Result, RuleError};
use crate::models::config::PartialSettings;
use crate::models::options::PartialRuleOptions;

use super::parser::DEFAULT_CONFIG_FILE;

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 20,
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 20,
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(RuleError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
///
/// Reads `<PREFIX>_EXCLUDE` (comma separated), `<PREFIX>_FORMAT`,
/// `<PREFIX>_SEVERITY`, `<PREFIX>_IGNORE_PRIVATE` and `<PREFIX>_RULE_OPTIONS`
/// (JSON, same schema as the `[rule]` table).
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

const ENV_KEYS: [&str; 5] = ["EXCLUDE", "FORMAT", "SEVERITY", "IGNORE_PRIVATE", "RULE_OPTIONS"];

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 10,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(exclude) = self.var("EXCLUDE") {
            settings.exclude_patterns = Some(
                exclude
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            );
        }

        if let Some(format) = self.var("FORMAT") {
            settings.output_format = Some(
                format
                    .parse()
                    .map_err(|_| RuleError::InvalidOutputFormat { format })?,
            );
        }

        if let Some(severity) = self.var("SEVERITY") {
            settings.severity = Some(severity.parse().map_err(RuleError::config_error)?);
        }

        if let Some(options) = self.var("RULE_OPTIONS") {
            let value: serde_json::Value = serde_json::from_str(&options).map_err(|e| {
                RuleError::invalid_options(format!("{}_RULE_OPTIONS is not valid JSON: {}", self.prefix, e))
            })?;
            settings.rule = PartialRuleOptions::from_json(&value)?;
        }

        if let Some(ignore_private) = self.var("IGNORE_PRIVATE") {
            settings.rule.ignore_private = Some(parse_bool(&ignore_private).ok_or_else(|| {
                RuleError::invalid_options(format!(
                    "{}_IGNORE_PRIVATE must be true or false, got '{}'",
                    self.prefix, ignore_private
                ))
            })?);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ENV_KEYS.iter().any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
