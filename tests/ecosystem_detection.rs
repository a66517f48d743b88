use std::fs;
use std::path::Path;

use dependabot_generate::analyzer::{
    Rule, RuleSet, Warning, aggregate, analyze_ecosystems, detect, scan,
};
use tempfile::TempDir;

fn tree(files: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in files {
        let path = dir.path().join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }
    dir
}

fn ignore(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}

fn grouping_of(root: &Path, ignore_list: &[String]) -> Vec<(String, Vec<String>)> {
    analyze_ecosystems(root, ignore_list, &RuleSet::defaults())
        .into_value()
        .iter()
        .map(|(eco, dirs)| (eco.to_string(), dirs.to_vec()))
        .collect()
}

#[test]
fn groups_root_and_service_directories() {
    let root = tree(&["go.mod", "svc/package.json", "svc/Dockerfile"]);

    let grouping = grouping_of(root.path(), &[]);
    assert_eq!(
        grouping,
        vec![
            ("docker".to_string(), vec!["/svc".to_string()]),
            ("gomod".to_string(), vec!["/".to_string()]),
            ("npm".to_string(), vec!["/svc".to_string()]),
        ]
    );
}

#[test]
fn ignored_directory_is_excluded_before_detection() {
    let root = tree(&["vendored-deps/package.json"]);
    assert!(grouping_of(root.path(), &ignore(&["vendored-deps"])).is_empty());
}

#[test]
fn ignore_matches_partial_segments() {
    let root = tree(&[
        "web/package.json",
        "web/node_modules/dep/package.json",
        "my_node_modules_backup/package.json",
    ]);

    let grouping = grouping_of(root.path(), &ignore(&["node_modules"]));
    assert_eq!(grouping, vec![("npm".to_string(), vec!["/web".to_string()])]);
}

#[test]
fn uv_project_is_not_reported_as_pip() {
    let root = tree(&["api/pyproject.toml", "cli/pyproject.toml", "cli/uv.lock"]);

    let grouping = grouping_of(root.path(), &[]);
    assert_eq!(
        grouping,
        vec![
            ("pip".to_string(), vec!["/api".to_string()]),
            ("uv".to_string(), vec!["/cli".to_string()]),
        ]
    );
}

#[test]
fn nested_projects_are_all_reported() {
    let root = tree(&[
        "Cargo.toml",
        "crates/core/Cargo.toml",
        "crates/cli/Cargo.toml",
        "infra/main.tf",
        "infra/modules/vpc/vpc.tf",
    ]);

    let grouping = grouping_of(root.path(), &[]);
    assert_eq!(
        grouping,
        vec![
            (
                "cargo".to_string(),
                vec!["/".to_string(), "/crates/cli".to_string(), "/crates/core".to_string()]
            ),
            (
                "terraform".to_string(),
                vec!["/infra".to_string(), "/infra/modules/vpc".to_string()]
            ),
        ]
    );
}

#[test]
fn aggregate_is_idempotent() {
    let root = tree(&["go.mod", "a/package.json", "b/Gemfile", "b/Dockerfile"]);
    let rules = RuleSet::defaults();
    let dirs = scan(root.path(), &[], &rules).into_value().directories();

    let first = aggregate(root.path(), &dirs, &rules);
    let second = aggregate(root.path(), &dirs, &rules);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn malformed_custom_rules_match_default_detection() {
    let root = tree(&["package.json", "Dockerfile", "svc/requirements.txt"]);

    let outcome = RuleSet::build(Some(r#"[{"ecosystem": "oops""#));
    assert!(matches!(outcome.warnings()[0], Warning::Config(_)));
    let fallback = outcome.into_value();

    let with_fallback = analyze_ecosystems(root.path(), &[], &fallback).into_value();
    let with_defaults = analyze_ecosystems(root.path(), &[], &RuleSet::defaults()).into_value();
    assert_eq!(with_fallback, with_defaults);
}

#[test]
fn custom_rules_extend_defaults() {
    let root = tree(&["deno.json", "package.json"]);
    let rules = RuleSet::build(Some(r#"[{"ecosystem": "deno", "patterns": ["deno.json*"]}]"#))
        .into_value();

    let found: Vec<String> = detect(root.path(), &rules).into_iter().collect();
    assert_eq!(found, vec!["deno", "npm"]);
}

#[test]
fn injected_rule_set_replaces_defaults() {
    let root = tree(&["package.json", "flake.nix"]);
    let rules = RuleSet::new(vec![Rule::with_patterns("nix", &["flake.nix"]).unwrap()]);

    let grouping = analyze_ecosystems(root.path(), &[], &rules).into_value();
    assert_eq!(grouping.ecosystems(), vec!["nix"]);
}

#[test]
fn missing_root_produces_empty_grouping() {
    let dir = TempDir::new().unwrap();
    let outcome = analyze_ecosystems(&dir.path().join("absent"), &[], &RuleSet::defaults());

    assert!(outcome.value().is_empty());
    assert_eq!(outcome.warnings().len(), 1);
}
