//! Lowering of an OXC program into host-neutral module items
//!
//! Only `program.body` is visited, so every produced declaration site is a
//! direct child of the module. Nested declarations are never seen.

use oxc_ast::ast::*;
use oxc_span::GetSpan;

use crate::models::module_item::{
    DeclarationKind, DeclarationSite, ExportSpecifier, ModuleItem, SourceSpan,
};

/// Lower every top-level statement, preserving source order
pub fn lower_program(program: &Program<'_>) -> Vec<ModuleItem> {
    program.body.iter().map(lower_statement).collect()
}

fn lower_statement(stmt: &Statement<'_>) -> ModuleItem {
    match stmt {
        Statement::VariableDeclaration(decl) => lower_variable_declaration(decl),
        Statement::FunctionDeclaration(func) => lower_function(func),
        Statement::ClassDeclaration(class) => lower_class(class),
        Statement::TSInterfaceDeclaration(decl) if !decl.declare => declaration(
            DeclarationKind::Interface,
            decl.id.name.to_string(),
            decl.span,
        ),
        Statement::TSTypeAliasDeclaration(decl) if !decl.declare => declaration(
            DeclarationKind::TypeAlias,
            decl.id.name.to_string(),
            decl.span,
        ),
        Statement::TSEnumDeclaration(decl) if !decl.declare => declaration(
            DeclarationKind::Enum,
            decl.id.name.to_string(),
            decl.span,
        ),
        Statement::ExportNamedDeclaration(export) => lower_named_export(export),
        Statement::ExportDefaultDeclaration(export) => lower_default_export(export),
        other => ModuleItem::Other {
            span: other.span().into(),
        },
    }
}

fn declaration(kind: DeclarationKind, name: String, span: oxc_span::Span) -> ModuleItem {
    ModuleItem::Declaration(DeclarationSite::single(kind, name, span.into()))
}

fn lower_variable_declaration(decl: &VariableDeclaration<'_>) -> ModuleItem {
    let span: SourceSpan = decl.span.into();

    // `using` bindings cannot be exported; ambient ones have no runtime binding
    let is_using = matches!(
        decl.kind,
        VariableDeclarationKind::Using | VariableDeclarationKind::AwaitUsing
    );
    if decl.declare || is_using {
        return ModuleItem::Other { span };
    }

    let names = variable_names(decl);
    if names.is_empty() {
        return ModuleItem::Other { span };
    }

    ModuleItem::Declaration(DeclarationSite::new(DeclarationKind::Variable, names, span))
}

/// Identifiers bound directly by each declarator; destructuring patterns
/// contribute nothing
fn variable_names(decl: &VariableDeclaration<'_>) -> Vec<String> {
    decl.declarations
        .iter()
        .filter_map(|declarator| match &declarator.id.kind {
            BindingPatternKind::BindingIdentifier(id) => Some(id.name.to_string()),
            _ => None,
        })
        .collect()
}

fn lower_function(func: &Function<'_>) -> ModuleItem {
    // Overload signatures and `declare function` lower to TSDeclareFunction
    let is_implementation = matches!(func.r#type, FunctionType::FunctionDeclaration);

    match &func.id {
        Some(id) if is_implementation && !func.declare => {
            declaration(DeclarationKind::Function, id.name.to_string(), func.span)
        }
        _ => ModuleItem::Other {
            span: func.span.into(),
        },
    }
}

fn lower_class(class: &Class<'_>) -> ModuleItem {
    match &class.id {
        Some(id) if !class.declare => {
            declaration(DeclarationKind::Class, id.name.to_string(), class.span)
        }
        _ => ModuleItem::Other {
            span: class.span.into(),
        },
    }
}

fn lower_named_export(export: &ExportNamedDeclaration<'_>) -> ModuleItem {
    let declared = export
        .declaration
        .as_ref()
        .map(declaration_names)
        .unwrap_or_default();

    let specifiers = export
        .specifiers
        .iter()
        .map(|specifier| ExportSpecifier {
            local: local_name(&specifier.local),
            exported: specifier.exported.name().to_string(),
        })
        .collect();

    ModuleItem::NamedExport {
        declared,
        specifiers,
        source: export.source.as_ref().map(|source| source.value.to_string()),
        span: export.span.into(),
    }
}

/// Names bound by a declaration wrapped in `export`
fn declaration_names(decl: &Declaration<'_>) -> Vec<String> {
    match decl {
        Declaration::VariableDeclaration(var_decl) => variable_names(var_decl),
        Declaration::FunctionDeclaration(func) => {
            func.id.iter().map(|id| id.name.to_string()).collect()
        }
        Declaration::ClassDeclaration(class) => {
            class.id.iter().map(|id| id.name.to_string()).collect()
        }
        Declaration::TSTypeAliasDeclaration(decl) => vec![decl.id.name.to_string()],
        Declaration::TSInterfaceDeclaration(decl) => vec![decl.id.name.to_string()],
        Declaration::TSEnumDeclaration(decl) => vec![decl.id.name.to_string()],
        Declaration::TSModuleDeclaration(decl) => match &decl.id {
            TSModuleDeclarationName::Identifier(id) => vec![id.name.to_string()],
            TSModuleDeclarationName::StringLiteral(_) => Vec::new(),
        },
        Declaration::TSImportEqualsDeclaration(decl) => vec![decl.id.name.to_string()],
        #[allow(unreachable_patterns)]
        _ => Vec::new(),
    }
}

fn local_name(name: &ModuleExportName<'_>) -> Option<String> {
    match name {
        ModuleExportName::IdentifierName(id) => Some(id.name.to_string()),
        ModuleExportName::IdentifierReference(id) => Some(id.name.to_string()),
        ModuleExportName::StringLiteral(_) => None,
    }
}

fn lower_default_export(export: &ExportDefaultDeclaration<'_>) -> ModuleItem {
    // `export default foo` re-exports an existing binding under `default`;
    // it has no declaration of its own and contributes no name
    let name = match &export.declaration {
        ExportDefaultDeclarationKind::FunctionDeclaration(func) => {
            func.id.as_ref().map(|id| id.name.to_string())
        }
        ExportDefaultDeclarationKind::ClassDeclaration(class) => {
            class.id.as_ref().map(|id| id.name.to_string())
        }
        ExportDefaultDeclarationKind::TSInterfaceDeclaration(decl) => {
            Some(decl.id.name.to_string())
        }
        _ => None,
    };

    ModuleItem::DefaultExport {
        name,
        span: export.span.into(),
    }
}
