//! The `required-exports` rule: metadata and the per-file check

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::auditor::{DeclarationAuditor, Violation};
use super::export_index::ExportIndex;
use super::privacy::{NamePrefix, PrivacyPredicate};
use crate::models::finding::{Finding, Fix};
use crate::models::module_item::ModuleItem;
use crate::models::options::RuleOptions;
use crate::utils::LineIndex;

pub const PLUGIN_NAME: &str = "required-exports";
pub const RULE_NAME: &str = "required-exports";
pub const MESSAGE_ID: &str = "missingExport";
pub const MESSAGE_TEMPLATE: &str = "Declaration \"{{name}}\" must be exported";
const DOCS_BASE_URL: &str =
    "https://github.com/tupe12334/eslint-plugin-required-exports/blob/main/docs";

/// Static description of the rule, as registered with a lint host
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleMeta {
    pub name: &'static str,
    /// `plugin/rule`, the id used in lint configuration
    pub qualified_name: String,
    #[serde(rename = "type")]
    pub rule_type: &'static str,
    pub description: &'static str,
    pub docs_url: String,
    pub fixable: &'static str,
    pub messages: Value,
    pub schema: Value,
}

impl RuleMeta {
    pub fn new() -> Self {
        Self {
            name: RULE_NAME,
            qualified_name: qualified_rule_id(),
            rule_type: "problem",
            description: "Require exports for top-level declarations",
            docs_url: format!("{}/{}.md", DOCS_BASE_URL, RULE_NAME),
            fixable: "code",
            messages: json!({ MESSAGE_ID: MESSAGE_TEMPLATE }),
            schema: RuleOptions::schema(),
        }
    }

    /// The `recommended` preset: rule enabled at error level
    pub fn recommended_config() -> Value {
        let rule_id = qualified_rule_id();
        json!({
            "plugins": [PLUGIN_NAME],
            "rules": { rule_id: "error" },
        })
    }
}

impl Default for RuleMeta {
    fn default() -> Self {
        Self::new()
    }
}

pub fn qualified_rule_id() -> String {
    format!("{}/{}", PLUGIN_NAME, RULE_NAME)
}

/// Render the finding message for a name
pub fn missing_export_message(name: &str) -> String {
    MESSAGE_TEMPLATE.replace("{{name}}", name)
}

/// The rule, configured for one or many analysis runs
///
/// Holds no per-file state: every [`RequiredExports::check`] call builds its
/// own export index, so one instance can be shared across threads.
pub struct RequiredExports {
    options: RuleOptions,
    privacy: Box<dyn PrivacyPredicate>,
}

impl RequiredExports {
    pub fn new(options: RuleOptions) -> Self {
        Self {
            options,
            privacy: Box::new(NamePrefix::default()),
        }
    }

    /// Replace the leading-underscore privacy convention
    pub fn with_privacy(mut self, privacy: impl PrivacyPredicate + 'static) -> Self {
        self.privacy = Box::new(privacy);
        self
    }

    pub fn options(&self) -> &RuleOptions {
        &self.options
    }

    /// Check one module's top-level items against `source`
    ///
    /// Returns findings in source order.
    pub fn check(&self, items: &[ModuleItem], source: &str) -> Vec<Finding> {
        let index = ExportIndex::build(items);
        debug!(exported = index.len(), items = items.len(), "built export index");

        let auditor = DeclarationAuditor::new(&self.options, self.privacy.as_ref(), &index);
        let lines = LineIndex::new(source);

        let mut findings: Vec<Finding> = auditor
            .audit(items)
            .into_iter()
            .filter_map(|violation| build_finding(violation, source, &lines))
            .collect();
        findings.sort_by_key(|finding| finding.span);
        findings
    }
}

impl Default for RequiredExports {
    fn default() -> Self {
        Self::new(RuleOptions::default())
    }
}

fn build_finding(violation: Violation<'_>, source: &str, lines: &LineIndex<'_>) -> Option<Finding> {
    let span = violation.site.span;
    let Some(fix) = export_fix(violation, source) else {
        warn!(
            name = violation.name,
            start = span.start,
            end = span.end,
            "declaration span lies outside the source text"
        );
        return None;
    };

    Some(Finding {
        rule_id: qualified_rule_id(),
        message_id: MESSAGE_ID.to_string(),
        declaration_kind: violation.site.kind,
        name: violation.name.to_string(),
        message: missing_export_message(violation.name),
        span,
        start: lines.position(span.start),
        end: lines.position(span.end),
        fix,
    })
}

/// Replace the declaration's exact text with `export <text>`
///
/// Text outside the span, including surrounding trivia, is left alone.
pub fn export_fix(violation: Violation<'_>, source: &str) -> Option<Fix> {
    let span = violation.site.span;
    span.text(source)
        .map(|text| Fix::new(span, format!("export {}", text)))
}
