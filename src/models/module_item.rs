//! Host-neutral view of a module's top-level statements
//!
//! The rule never looks at parser nodes directly. The front end lowers each
//! direct child of the program into a [`ModuleItem`], which carries only what
//! the export check needs: declaration kind, bound names, export wrapper
//! metadata and the source span.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte range into the original source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: u32,
    pub end: u32,
}

impl SourceSpan {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Exact source text covered by this span, if it lies inside `source`
    pub fn text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start as usize..self.end as usize)
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether two spans share at least one byte
    pub fn overlaps(&self, other: &SourceSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl From<oxc_span::Span> for SourceSpan {
    fn from(span: oxc_span::Span) -> Self {
        Self::new(span.start, span.end)
    }
}

/// Declaration kinds the rule knows how to audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclarationKind {
    Variable,
    Function,
    Class,
    Interface,
    #[serde(rename = "type")]
    TypeAlias,
    Enum,
}

impl DeclarationKind {
    pub const ALL: [DeclarationKind; 6] = [
        DeclarationKind::Variable,
        DeclarationKind::Function,
        DeclarationKind::Class,
        DeclarationKind::Interface,
        DeclarationKind::TypeAlias,
        DeclarationKind::Enum,
    ];

    /// Option key that toggles this kind
    pub fn option_key(&self) -> &'static str {
        match self {
            DeclarationKind::Variable => "variable",
            DeclarationKind::Function => "function",
            DeclarationKind::Class => "class",
            DeclarationKind::Interface => "interface",
            DeclarationKind::TypeAlias => "type",
            DeclarationKind::Enum => "enum",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.option_key())
    }
}

/// A declaration that is a direct child of the module
///
/// Only the front end constructs these, and only from `program.body`, so a
/// site is top-level by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationSite {
    pub kind: DeclarationKind,
    /// Bound identifiers in source order. Function, class and TS declarations
    /// bind exactly one; a variable statement may bind several.
    pub names: Vec<String>,
    pub span: SourceSpan,
}

impl DeclarationSite {
    pub fn new(kind: DeclarationKind, names: Vec<String>, span: SourceSpan) -> Self {
        Self { kind, names, span }
    }

    pub fn single(kind: DeclarationKind, name: impl Into<String>, span: SourceSpan) -> Self {
        Self::new(kind, vec![name.into()], span)
    }
}

/// One `local as exported` pair of an export clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSpecifier {
    /// Name as bound in this module; `None` for string-literal names
    pub local: Option<String>,
    pub exported: String,
}

impl ExportSpecifier {
    pub fn new(local: impl Into<String>, exported: impl Into<String>) -> Self {
        Self {
            local: Some(local.into()),
            exported: exported.into(),
        }
    }
}

/// A direct child of the module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleItem {
    /// A bare, unexported declaration the rule may audit
    Declaration(DeclarationSite),

    /// `export <declaration>` or `export { ... } [from "..."]`
    NamedExport {
        /// Names bound by the wrapped declaration
        declared: Vec<String>,
        specifiers: Vec<ExportSpecifier>,
        source: Option<String>,
        span: SourceSpan,
    },

    /// `export default ...`; `name` is set only for named declarations
    DefaultExport {
        name: Option<String>,
        span: SourceSpan,
    },

    /// Anything else: imports, namespaces, statements, ambient or anonymous
    /// declarations
    Other { span: SourceSpan },
}

impl ModuleItem {
    pub fn span(&self) -> SourceSpan {
        match self {
            ModuleItem::Declaration(site) => site.span,
            ModuleItem::NamedExport { span, .. }
            | ModuleItem::DefaultExport { span, .. }
            | ModuleItem::Other { span } => *span,
        }
    }

    pub fn as_declaration(&self) -> Option<&DeclarationSite> {
        match self {
            ModuleItem::Declaration(site) => Some(site),
            _ => None,
        }
    }
}
