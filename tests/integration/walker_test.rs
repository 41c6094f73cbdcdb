//! Checking whole project trees

use required_exports::cli::run_check;
use required_exports::config::{load_config_with_env_prefix, CliArgs};
use required_exports::models::config::Severity;
use required_exports::{Settings, Walker};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const UNSET_ENV_PREFIX: &str = "REQUIRED_EXPORTS_INTEGRATION_UNSET";

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn create_project() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();

    write(root, "src/index.ts", "export { helper } from \"./helper\";\nconst version = \"1\";\n");
    write(root, "src/helper.ts", "export function helper() {}\nfunction _internal() {}\n");
    write(root, "src/models/user.ts", "interface User { id: string }\ntype Id = string;\nexport { Id };\n");
    write(root, "src/legacy.mjs", "var config = {};\nmodule.exports = config;\n");
    write(root, "src/types.d.ts", "declare interface Ambient {}\n");
    write(root, "src/styles.css", "body {}\n");
    write(root, "node_modules/dep/index.js", "const hidden = 1;\n");
    write(root, "dist/bundle.js", "function built() {}\n");
    write(root, "generated/api.ts", "class Client {}\n");

    dir
}

fn settings_for(root: &Path) -> Settings {
    Settings {
        paths: vec![root.to_path_buf()],
        show_progress: false,
        use_colors: false,
        ..Settings::default()
    }
}

#[test]
fn test_project_check() {
    let project = create_project();
    let results = run_check(&settings_for(project.path())).unwrap();

    let checked: Vec<String> = results
        .files
        .iter()
        .map(|f| {
            f.path
                .strip_prefix(project.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    assert_eq!(
        checked,
        vec![
            "generated/api.ts",
            "src/helper.ts",
            "src/index.ts",
            "src/legacy.mjs",
            "src/models/user.ts",
        ]
    );

    let names: Vec<&str> = results
        .files
        .iter()
        .flat_map(|f| f.findings.iter().map(|finding| finding.name.as_str()))
        .collect();
    assert_eq!(names, vec!["Client", "version", "config", "User"]);
    assert_eq!(results.summary.total_findings, 4);
    assert_eq!(results.summary.files_with_findings, 4);
}

#[test]
fn test_parallel_matches_sequential() {
    let project = create_project();
    let parallel = run_check(&settings_for(project.path())).unwrap();
    let sequential = run_check(&Settings {
        parallel: false,
        ..settings_for(project.path())
    })
    .unwrap();

    assert_eq!(parallel.summary, sequential.summary);
    let findings = |r: &required_exports::CheckResults| {
        r.files.iter().flat_map(|f| f.findings.clone()).collect::<Vec<_>>()
    };
    assert_eq!(findings(&parallel), findings(&sequential));
}

#[test]
fn test_config_file_drives_the_check() {
    let project = create_project();
    let config = project.path().join("lint.toml");
    fs::write(
        &config,
        "exclude_patterns = [\"node_modules\", \"dist\", \"generated\"]\nseverity = \"warn\"\n\n[rule]\nvariable = false\n",
    )
    .unwrap();

    let settings = load_config_with_env_prefix(
        CliArgs {
            paths: vec![project.path().to_path_buf()],
            config: Some(config),
            no_progress: true,
            ..Default::default()
        },
        UNSET_ENV_PREFIX,
    )
    .unwrap();
    assert_eq!(settings.severity, Severity::Warn);

    let results = run_check(&settings).unwrap();
    let names: Vec<&str> = results
        .files
        .iter()
        .flat_map(|f| f.findings.iter().map(|finding| finding.name.as_str()))
        .collect();
    assert_eq!(names, vec!["User"]);
}

#[test]
fn test_fix_whole_project() {
    let project = create_project();
    let settings = Settings {
        fix: true,
        ..settings_for(project.path())
    };

    let results = run_check(&settings).unwrap();
    assert_eq!(results.summary.fixes_applied, 4);
    assert_eq!(results.summary.total_findings, 0);
    assert_eq!(
        fs::read_to_string(project.path().join("src/legacy.mjs")).unwrap(),
        "export var config = {};\nmodule.exports = config;\n"
    );

    let rerun = Walker::new(settings_for(project.path()))
        .unwrap()
        .check(|_| {})
        .unwrap();
    assert!(!rerun.has_findings());
}
