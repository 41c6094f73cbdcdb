//! Rule options: which declaration kinds must be exported
//!
//! Options arrive from a TOML `[rule]` table, from JSON in the host's
//! `[{ ... }]` form, or from CLI flags. Every source goes through the same
//! strict schema: camelCase boolean keys, unknown keys rejected.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{Result, RuleError};
use crate::models::module_item::DeclarationKind;

/// Resolved rule options, immutable for one analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct RuleOptions {
    pub variable: bool,
    pub function: bool,
    pub class: bool,
    pub interface: bool,
    #[serde(rename = "type")]
    pub type_alias: bool,
    #[serde(rename = "enum")]
    pub enums: bool,
    /// Skip names matching the privacy convention
    pub ignore_private: bool,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            variable: true,
            function: true,
            class: true,
            interface: true,
            type_alias: true,
            enums: true,
            ignore_private: true,
        }
    }
}

impl RuleOptions {
    /// Whether declarations of `kind` have to be exported
    pub fn is_enabled(&self, kind: DeclarationKind) -> bool {
        match kind {
            DeclarationKind::Variable => self.variable,
            DeclarationKind::Function => self.function,
            DeclarationKind::Class => self.class,
            DeclarationKind::Interface => self.interface,
            DeclarationKind::TypeAlias => self.type_alias,
            DeclarationKind::Enum => self.enums,
        }
    }

    /// Builder-style toggle for one kind
    pub fn with_kind(mut self, kind: DeclarationKind, enabled: bool) -> Self {
        match kind {
            DeclarationKind::Variable => self.variable = enabled,
            DeclarationKind::Function => self.function = enabled,
            DeclarationKind::Class => self.class = enabled,
            DeclarationKind::Interface => self.interface = enabled,
            DeclarationKind::TypeAlias => self.type_alias = enabled,
            DeclarationKind::Enum => self.enums = enabled,
        }
        self
    }

    pub fn with_ignore_private(mut self, ignore_private: bool) -> Self {
        self.ignore_private = ignore_private;
        self
    }

    /// Parse options from JSON
    ///
    /// Accepts a bare object (`{"variable": false}`) or the rule-options
    /// array form (`[{"variable": false}]`). An empty array or `null` means
    /// defaults.
    pub fn from_json(value: &Value) -> Result<Self> {
        Ok(PartialRuleOptions::from_json(value)?.resolve())
    }

    /// Parse options from a JSON string
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| RuleError::invalid_options(format!("not valid JSON: {}", e)))?;
        Self::from_json(&value)
    }

    /// JSON schema of the options object
    pub fn schema() -> Value {
        let mut properties = serde_json::Map::new();
        for key in DeclarationKind::ALL
            .iter()
            .map(|kind| kind.option_key())
            .chain(std::iter::once("ignorePrivate"))
        {
            properties.insert(key.to_string(), json!({ "type": "boolean", "default": true }));
        }

        json!([{
            "type": "object",
            "properties": Value::Object(properties),
            "additionalProperties": false,
        }])
    }
}

/// Options from a single configuration layer; `None` leaves the lower layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialRuleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_alias: Option<bool>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enums: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_private: Option<bool>,
}

impl PartialRuleOptions {
    /// Parse a JSON payload with the same rules as [`RuleOptions::from_json`]
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = match value {
            Value::Null => return Ok(Self::default()),
            Value::Array(items) => match items.as_slice() {
                [] => return Ok(Self::default()),
                [only] => only,
                _ => {
                    return Err(RuleError::invalid_options(format!(
                        "expected at most one options object, found {}",
                        items.len()
                    )))
                }
            },
            other => other,
        };

        if !object.is_object() {
            return Err(RuleError::invalid_options(format!(
                "expected an object, found {}",
                json_type_name(object)
            )));
        }

        Self::deserialize(object).map_err(|e| RuleError::invalid_options(e.to_string()))
    }

    /// Overlay `other` on top of `self`
    pub fn merge_from(&mut self, other: PartialRuleOptions) {
        if other.variable.is_some() {
            self.variable = other.variable;
        }
        if other.function.is_some() {
            self.function = other.function;
        }
        if other.class.is_some() {
            self.class = other.class;
        }
        if other.interface.is_some() {
            self.interface = other.interface;
        }
        if other.type_alias.is_some() {
            self.type_alias = other.type_alias;
        }
        if other.enums.is_some() {
            self.enums = other.enums;
        }
        if other.ignore_private.is_some() {
            self.ignore_private = other.ignore_private;
        }
    }

    /// Fill unset flags with the defaults
    pub fn resolve(&self) -> RuleOptions {
        let defaults = RuleOptions::default();
        RuleOptions {
            variable: self.variable.unwrap_or(defaults.variable),
            function: self.function.unwrap_or(defaults.function),
            class: self.class.unwrap_or(defaults.class),
            interface: self.interface.unwrap_or(defaults.interface),
            type_alias: self.type_alias.unwrap_or(defaults.type_alias),
            enums: self.enums.unwrap_or(defaults.enums),
            ignore_private: self.ignore_private.unwrap_or(defaults.ignore_private),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
