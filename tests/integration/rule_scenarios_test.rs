//! Rule behavior on complete source files

use pretty_assertions::assert_eq;
use required_exports::parsers::SourceParser;
use required_exports::{Analyzer, DeclarationKind, ExportIndex, Finding, RuleOptions};
use serde_json::json;
use std::path::Path;

fn check_with(source: &str, options: RuleOptions) -> Vec<Finding> {
    Analyzer::new(options)
        .check_source(source, Path::new("module.ts"))
        .unwrap()
}

fn check(source: &str) -> Vec<Finding> {
    check_with(source, RuleOptions::default())
}

fn options(value: serde_json::Value) -> RuleOptions {
    RuleOptions::from_json(&value).unwrap()
}

fn assert_single(source: &str, name: &str, kind: DeclarationKind, fixed: &str) {
    let findings = check(source);
    assert_eq!(findings.len(), 1, "{source}");
    assert_eq!(findings[0].name, name);
    assert_eq!(findings[0].declaration_kind, kind);
    assert_eq!(findings[0].message, format!("Declaration \"{name}\" must be exported"));
    assert_eq!(findings[0].fix.replacement, fixed);
}

#[test]
fn test_unexported_variable() {
    assert_single("const foo = 1;", "foo", DeclarationKind::Variable, "export const foo = 1;");
}

#[test]
fn test_unexported_function() {
    assert_single("function bar() {}", "bar", DeclarationKind::Function, "export function bar() {}");
}

#[test]
fn test_exported_through_specifier() {
    assert!(check("const foo = 1; export { foo };").is_empty());
}

#[test]
fn test_private_variable() {
    assert!(check("const _private = 1;").is_empty());

    let findings = check_with("const _private = 1;", options(json!({ "ignorePrivate": false })));
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].name, "_private");
}

#[test]
fn test_unexported_interface() {
    assert_single("interface Qux {}", "Qux", DeclarationKind::Interface, "export interface Qux {}");
}

#[test]
fn test_variable_kind_disabled() {
    assert!(check_with("const foo = 1;", options(json!({ "variable": false }))).is_empty());
}

#[test]
fn test_class_type_and_enum() {
    assert_single("class Baz {}", "Baz", DeclarationKind::Class, "export class Baz {}");
    assert_single(
        "type Quux = string;",
        "Quux",
        DeclarationKind::TypeAlias,
        "export type Quux = string;",
    );
    assert_single(
        "enum Color { Red, Green, Blue }",
        "Color",
        DeclarationKind::Enum,
        "export enum Color { Red, Green, Blue }",
    );
}

#[test]
fn test_private_function_and_disabled_function_kind() {
    assert!(check("function _privateFunc() {}").is_empty());
    assert!(check_with("function bar() {}", options(json!([{ "function": false }]))).is_empty());
}

#[test]
fn test_each_disabled_kind_yields_nothing_for_that_kind() {
    let source = "const a = 1;\nfunction b() {}\nclass C {}\ninterface D {}\ntype E = 1;\nenum F { G }\n";
    assert_eq!(check(source).len(), 6);

    for kind in DeclarationKind::ALL {
        let findings = check_with(source, RuleOptions::default().with_kind(kind, false));
        assert_eq!(findings.len(), 5);
        assert!(findings.iter().all(|f| f.declaration_kind != kind));
    }
}

#[test]
fn test_exported_only_file() {
    let source = r#"
export const a = 1, b = 2;
export function c() {}
export class D {}
export interface E {}
export type F = string;
export enum G { H }
"#;
    assert!(check(source).is_empty());

    let parser = SourceParser::new();
    let path = Path::new("module.ts");
    let items = parser
        .parse_items(source, SourceParser::source_type_for(path).unwrap(), path)
        .unwrap();
    let index = ExportIndex::build(&items);
    assert_eq!(index.names(), vec!["D", "E", "F", "G", "a", "b", "c"]);
}

#[test]
fn test_findings_are_ordered_and_one_per_statement() {
    let source = "class Z {}\nlet x = 1, y = 2;\nexport { y };\nfunction a() {}\n";
    let findings = check(source);
    let names: Vec<&str> = findings.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Z", "x", "a"]);
    assert_eq!(findings[1].start.line, 2);
}

#[test]
fn test_nested_and_non_declarations_ignored() {
    let source = r#"
import { thing } from "./thing";
function outer() {
    const inner = 1;
    function nested() {}
    return inner;
}
export { outer };
export * from "./other";
thing();
declare const ambient: number;
export default function () {}
"#;
    assert!(check(source).is_empty());
}

#[test]
fn test_default_export_names() {
    assert!(check("export default class Widget {}\n").is_empty());
    assert_eq!(check("function f() {}\nexport default f;\n").len(), 1);
}
