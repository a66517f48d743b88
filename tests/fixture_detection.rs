use std::path::Path;

use dependabot_generate::analyzer::{RuleSet, analyze_ecosystems};
use dependabot_generate::generator::render_dependabot_config;

struct Case<'a> {
    ecosystem: &'a str,
    directories: &'a [&'a str],
}

#[test]
fn detects_ecosystems_in_monorepo_fixture() {
    let cases = [
        Case { ecosystem: "devcontainers", directories: &["/.devcontainer"] },
        Case { ecosystem: "docker", directories: &["/services/api"] },
        Case { ecosystem: "gomod", directories: &["/"] },
        Case { ecosystem: "npm", directories: &["/services/api"] },
        Case { ecosystem: "pip", directories: &["/tools"] },
        Case { ecosystem: "terraform", directories: &["/infra"] },
        Case { ecosystem: "uv", directories: &["/services/worker"] },
    ];

    let outcome = analyze_ecosystems(
        Path::new("tests/fixtures/monorepo"),
        &[],
        &RuleSet::defaults(),
    );
    assert!(outcome.is_clean(), "unexpected warnings: {:?}", outcome.warnings());
    let grouping = outcome.into_value();

    for case in &cases {
        let found = grouping
            .get(case.ecosystem)
            .unwrap_or_else(|| panic!("{}: not detected, got {:?}", case.ecosystem, grouping.ecosystems()));
        assert_eq!(found, case.directories, "{}: wrong directories", case.ecosystem);
    }
    assert_eq!(grouping.len(), cases.len());
}

#[test]
fn fixture_output_is_stable_across_runs() {
    let root = Path::new("tests/fixtures/monorepo");
    let ignore = vec!["tools".to_string()];
    let rules = RuleSet::defaults();

    let first = render_dependabot_config(&analyze_ecosystems(root, &ignore, &rules).into_value(), "weekly").unwrap();
    let second = render_dependabot_config(&analyze_ecosystems(root, &ignore, &rules).into_value(), "weekly").unwrap();

    assert_eq!(first, second);
    assert!(!first.contains(r#"package-ecosystem: "pip""#));
    assert!(first.contains(r#"directories: ["/services/worker"]"#));
}
