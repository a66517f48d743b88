use crate::analyzer::EcosystemGrouping;
use crate::error::Result;
use serde::Serialize;
use tera::{Context, Tera};

const TEMPLATE_NAME: &str = "dependabot.yml";
const DEPENDABOT_TEMPLATE: &str = include_str!("templates/dependabot.yml.tera");

/// Locations Dependabot checks for workflow and composite action files. The
/// `github-actions` entry is always emitted, whatever was detected.
pub const GITHUB_ACTIONS_DIRECTORIES: &[&str] = &[
    "/",
    ".github/actions/*/*.yml",
    ".github/actions/*/*.yaml",
    "action.yml",
    "action.yaml",
    "actions/*/*.yml",
    "actions/*/*.yaml",
];

#[derive(Debug, Serialize)]
struct UpdateEntry<'a> {
    ecosystem: &'a str,
    directories: &'a [String],
}

/// Renders `dependabot.yml`. `interval` is passed through as given.
pub fn render_dependabot_config(grouping: &EcosystemGrouping, interval: &str) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, DEPENDABOT_TEMPLATE)?;

    let updates: Vec<UpdateEntry> = grouping
        .iter()
        .map(|(ecosystem, directories)| UpdateEntry {
            ecosystem,
            directories,
        })
        .collect();

    let mut context = Context::new();
    context.insert("interval", interval);
    context.insert("actions_directories", GITHUB_ACTIONS_DIRECTORIES);
    context.insert("updates", &updates);

    Ok(tera.render(TEMPLATE_NAME, &context)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"version: 2
updates:
  - package-ecosystem: "github-actions"
    directories: ["/", ".github/actions/*/*.yml", ".github/actions/*/*.yaml", "action.yml", "action.yaml", "actions/*/*.yml", "actions/*/*.yaml"]
    schedule:
      interval: "daily"
    groups:
      github-actions:
        patterns: ["*"]
        update-types: ["minor", "patch"]
    labels:
      - "dependencies"
"#;

    fn grouping(pairs: &[(&str, &str)]) -> EcosystemGrouping {
        pairs
            .iter()
            .map(|(eco, dir)| (eco.to_string(), dir.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_grouping_renders_header_only() {
        let rendered = render_dependabot_config(&EcosystemGrouping::default(), "daily").unwrap();
        assert_eq!(rendered, HEADER);
    }

    #[test]
    fn test_renders_one_block_per_ecosystem() {
        let grouping = grouping(&[("gomod", "/yolo"), ("gomod", "/"), ("docker", "/")]);
        let rendered = render_dependabot_config(&grouping, "daily").unwrap();

        let expected = format!(
            "{HEADER}{}{}",
            r#"
  - package-ecosystem: "docker"
    directories: ["/"]
    schedule:
      interval: "daily"
    allow:
      - dependency-type: all
    groups:
      docker:
        patterns: ["*"]
        update-types: ["minor", "patch"]
    labels:
      - "dependencies"
"#,
            r#"
  - package-ecosystem: "gomod"
    directories: ["/", "/yolo"]
    schedule:
      interval: "daily"
    allow:
      - dependency-type: all
    groups:
      gomod:
        patterns: ["*"]
        update-types: ["minor", "patch"]
    labels:
      - "dependencies"
"#
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_interval_is_passed_through() {
        let rendered = render_dependabot_config(&grouping(&[("npm", "/")]), "monthly").unwrap();
        assert_eq!(rendered.matches(r#"interval: "monthly""#).count(), 2);
    }
}
