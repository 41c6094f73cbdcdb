//! Fixes applied to source text and files on disk

use pretty_assertions::assert_eq;
use required_exports::{apply_fixes, Analyzer, FixMode, RuleOptions};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_fix_then_reanalyze_is_clean() {
    let analyzer = Analyzer::default();
    let path = Path::new("module.ts");
    let source = "const foo = 1;\nfunction bar() {}\ninterface Qux {}\nenum Color { Red }\n";

    let findings = analyzer.check_source(source, path).unwrap();
    assert_eq!(findings.len(), 4);

    let (fixed, applied) = apply_fixes(source, &findings);
    assert_eq!(applied, 4);
    assert_eq!(
        fixed,
        "export const foo = 1;\nexport function bar() {}\nexport interface Qux {}\nexport enum Color { Red }\n"
    );
    assert!(analyzer.check_source(&fixed, path).unwrap().is_empty());
}

#[test]
fn test_fix_preserves_surrounding_text() {
    let analyzer = Analyzer::default();
    let path = Path::new("module.js");
    let source = "// header\nimport x from \"x\";\n\nlet a = x, b = 2; // trailing\n";

    let outcome = analyzer.fix_source(source, path).unwrap();
    assert_eq!(outcome.applied, 1);
    assert!(outcome.remaining.is_empty());
    assert_eq!(
        outcome.output,
        "// header\nimport x from \"x\";\n\nexport let a = x, b = 2; // trailing\n"
    );
}

#[test]
fn test_fix_that_breaks_parsing_keeps_last_valid_text() {
    let analyzer = Analyzer::default();
    let path = Path::new("module.js");
    // Exporting the statement would export `_b` twice.
    let source = "let a = 1, _b = 2;\nexport { _b };\n";

    let outcome = analyzer.fix_source(source, path).unwrap();
    assert_eq!(outcome.output, source);
    assert_eq!(outcome.applied, 0);
    assert_eq!(outcome.remaining.len(), 1);
    assert_eq!(outcome.remaining[0].name, "a");
}

#[test]
fn test_dry_run_reports_unfixable_finding() {
    let temp_dir = tempdir().unwrap();
    let file = temp_dir.path().join("module.js");
    let source = "let a = 1, _b = 2;\nexport { _b };\n";
    fs::write(&file, source).unwrap();

    let report = Analyzer::default()
        .analyze_file(&file, FixMode::DryRun)
        .unwrap();
    assert_eq!(report.fixes_applied, 0);
    assert!(report.fixed_source.is_none());
    assert_eq!(report.findings.len(), 1);
    assert_eq!(fs::read_to_string(&file).unwrap(), source);
}

#[test]
fn test_fix_write_and_dry_run() {
    let temp_dir = tempdir().unwrap();
    let file = temp_dir.path().join("util.ts");
    let source = "type Id = string;\nclass Store {}\n";
    fs::write(&file, source).unwrap();

    let analyzer = Analyzer::new(RuleOptions::default());

    let dry = analyzer.analyze_file(&file, FixMode::DryRun).unwrap();
    assert_eq!(dry.fixes_applied, 2);
    assert_eq!(
        dry.fixed_source.as_deref(),
        Some("export type Id = string;\nexport class Store {}\n")
    );
    assert_eq!(fs::read_to_string(&file).unwrap(), source);

    let written = analyzer.analyze_file(&file, FixMode::Write).unwrap();
    assert_eq!(written.fixes_applied, 2);
    assert!(written.findings.is_empty());
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "export type Id = string;\nexport class Store {}\n"
    );

    let again = analyzer.analyze_file(&file, FixMode::Off).unwrap();
    assert!(again.is_clean());
}
