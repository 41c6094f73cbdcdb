//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, FormatArg, SeverityArg};
use crate::error::{Result, RuleError};
use crate::models::config::{OutputFormat, PartialSettings, Severity};
use crate::models::module_item::DeclarationKind;
use crate::models::options::PartialRuleOptions;

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments relevant to settings
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub paths: Vec<PathBuf>,
    pub exclude: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    /// Rule kinds switched off with `--no-<kind>`
    pub disabled_kinds: Vec<DeclarationKind>,
    pub check_private: bool,
    /// Raw `--rule-options` JSON
    pub rule_options: Option<String>,
    pub severity: Option<Severity>,
    pub fix: bool,
    pub fix_dry_run: bool,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
    pub no_colors: bool,
    pub no_parallel: bool,
    pub no_progress: bool,
    pub follow_links: bool,
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Extract the settings-relevant arguments
    pub fn from_args(args: &Args) -> Self {
        let kind_flags = [
            (DeclarationKind::Variable, args.no_variable),
            (DeclarationKind::Function, args.no_function),
            (DeclarationKind::Class, args.no_class),
            (DeclarationKind::Interface, args.no_interface),
            (DeclarationKind::TypeAlias, args.no_type),
            (DeclarationKind::Enum, args.no_enum),
        ];

        Self {
            paths: args.paths.clone(),
            exclude: if args.exclude.is_empty() {
                None
            } else {
                Some(args.exclude.clone())
            },
            max_depth: args.max_depth,
            disabled_kinds: kind_flags
                .into_iter()
                .filter(|(_, off)| *off)
                .map(|(kind, _)| kind)
                .collect(),
            check_private: args.check_private,
            rule_options: args.rule_options.clone(),
            severity: args.severity.map(|s| match s {
                SeverityArg::Off => Severity::Off,
                SeverityArg::Warn => Severity::Warn,
                SeverityArg::Error => Severity::Error,
            }),
            fix: args.fix,
            fix_dry_run: args.fix_dry_run,
            output_format: args.format.map(|f| match f {
                FormatArg::Text => OutputFormat::Text,
                FormatArg::Json => OutputFormat::Json,
            }),
            output_file: args.output_file.clone(),
            quiet: args.quiet,
            verbose: args.verbose,
            no_colors: args.no_colors,
            no_parallel: args.no_parallel,
            no_progress: args.no_progress,
            follow_links: args.follow_links,
            config: args.config.clone(),
        }
    }

    /// `--rule-options` first, then the individual flags on top
    fn rule_overrides(&self) -> Result<PartialRuleOptions> {
        let mut rule = match &self.rule_options {
            Some(json) => {
                let value: serde_json::Value = serde_json::from_str(json).map_err(|e| {
                    RuleError::invalid_options(format!("--rule-options is not valid JSON: {}", e))
                })?;
                PartialRuleOptions::from_json(&value)?
            }
            None => PartialRuleOptions::default(),
        };

        for kind in &self.disabled_kinds {
            let slot = match kind {
                DeclarationKind::Variable => &mut rule.variable,
                DeclarationKind::Function => &mut rule.function,
                DeclarationKind::Class => &mut rule.class,
                DeclarationKind::Interface => &mut rule.interface,
                DeclarationKind::TypeAlias => &mut rule.type_alias,
                DeclarationKind::Enum => &mut rule.enums,
            };
            *slot = Some(false);
        }

        if self.check_private {
            rule.ignore_private = Some(false);
        }

        Ok(rule)
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30,
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from_args(args))
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let args = &self.args;
        let mut settings = PartialSettings {
            rule: args.rule_overrides()?,
            ..PartialSettings::default()
        };

        if !args.paths.is_empty() {
            settings.paths = Some(args.paths.clone());
        }
        if let Some(exclude) = &args.exclude {
            settings.exclude_patterns = Some(exclude.clone());
        }
        settings.max_depth = args.max_depth;
        settings.severity = args.severity;
        settings.output_format = args.output_format;
        settings.output_file = args.output_file.clone();

        // Boolean flags only override when set
        if args.fix {
            settings.fix = Some(true);
        }
        if args.fix_dry_run {
            settings.fix_dry_run = Some(true);
        }
        if args.quiet {
            settings.quiet = Some(true);
        }
        if args.verbose {
            settings.verbose = Some(true);
        }
        if args.no_colors {
            settings.use_colors = Some(false);
        }
        if args.no_parallel {
            settings.parallel = Some(false);
        }
        if args.no_progress {
            settings.show_progress = Some(false);
        }
        if args.follow_links {
            settings.follow_links = Some(true);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
