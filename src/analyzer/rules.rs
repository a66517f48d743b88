//! Ecosystem detection rules.
//!
//! A rule names a Dependabot `package-ecosystem` and the marker-file condition
//! that reveals it. Conditions come in two shapes:
//!
//! - a pattern list, where any glob matching any file triggers detection
//! - a list of heuristics, each requiring a set of present patterns and a set
//!   of absent patterns; any satisfied heuristic triggers detection
//!
//! User supplied rules use the same JSON shape as the built-in table and are
//! evaluated ahead of it. Every matching rule fires, so custom rules extend
//! detection rather than replace it.

use super::outcome::Outcome;
use crate::error::ConfigError;
use glob::Pattern;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// JSON form of a rule, as accepted by `--custom-map`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub ecosystem: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub heuristics: Vec<HeuristicSpec>,
}

/// JSON form of a present/absent heuristic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicSpec {
    #[serde(default)]
    pub present: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub absent: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heuristic {
    pub present: Vec<Pattern>,
    pub absent: Vec<Pattern>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    PatternList(Vec<Pattern>),
    Heuristics(Vec<Heuristic>),
}

impl Condition {
    pub fn kind(&self) -> &'static str {
        match self {
            Condition::PatternList(_) => "patterns",
            Condition::Heuristics(_) => "heuristic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    ecosystem: String,
    condition: Condition,
}

impl Rule {
    pub fn new(ecosystem: impl Into<String>, condition: Condition) -> Self {
        Self {
            ecosystem: ecosystem.into(),
            condition,
        }
    }

    /// Shorthand for a pattern-list rule.
    pub fn with_patterns(ecosystem: &str, patterns: &[&str]) -> Result<Self, ConfigError> {
        Ok(Self::new(ecosystem, Condition::PatternList(compile_all(patterns)?)))
    }

    pub fn ecosystem(&self) -> &str {
        &self.ecosystem
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Compiles a JSON rule. A spec carrying both `patterns` and `heuristics`
    /// yields one rule per condition kind.
    pub fn from_spec(spec: &RuleSpec) -> Result<Vec<Rule>, ConfigError> {
        let ecosystem = spec.ecosystem.trim();
        if ecosystem.is_empty() {
            return Err(ConfigError::InvalidRule {
                ecosystem: spec.ecosystem.clone(),
                reason: "ecosystem name is empty".to_string(),
            });
        }
        if spec.patterns.is_empty() && spec.heuristics.is_empty() {
            return Err(ConfigError::InvalidRule {
                ecosystem: ecosystem.to_string(),
                reason: "rule must define `patterns` or `heuristics`".to_string(),
            });
        }

        let mut rules = Vec::with_capacity(2);
        if !spec.heuristics.is_empty() {
            let heuristics = spec
                .heuristics
                .iter()
                .map(|h| {
                    Ok(Heuristic {
                        present: compile_all(&h.present)?,
                        absent: compile_all(&h.absent)?,
                    })
                })
                .collect::<Result<Vec<_>, ConfigError>>()?;
            rules.push(Rule::new(ecosystem, Condition::Heuristics(heuristics)));
        }
        if !spec.patterns.is_empty() {
            rules.push(Rule::new(
                ecosystem,
                Condition::PatternList(compile_all(&spec.patterns)?),
            ));
        }
        Ok(rules)
    }
}

fn compile_all<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Pattern>, ConfigError> {
    patterns
        .iter()
        .map(|p| {
            let p = p.as_ref();
            Pattern::new(p).map_err(|e| ConfigError::InvalidPattern {
                pattern: p.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Ordered, immutable collection of rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The built-in rule table. An entry that fails to compile is logged and
    /// left out.
    pub fn defaults() -> Self {
        let mut rules = Vec::new();
        for spec in default_specs() {
            match Rule::from_spec(&spec) {
                Ok(compiled) => rules.extend(compiled),
                Err(e) => error!("Skipping built-in rule for {}: {}", spec.ecosystem, e),
            }
        }
        Self::new(rules)
    }

    /// Strictly parses a JSON rule list.
    pub fn parse_rules(json: &str) -> Result<Vec<Rule>, ConfigError> {
        let specs: Vec<RuleSpec> =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        let mut rules = Vec::with_capacity(specs.len());
        for spec in &specs {
            rules.extend(Rule::from_spec(spec)?);
        }
        Ok(rules)
    }

    /// Builds the rule set for a run. Custom rules are placed ahead of the
    /// defaults; a malformed override falls back to the defaults alone and is
    /// reported as a warning on the outcome.
    pub fn build(custom_rules_json: Option<&str>) -> Outcome<RuleSet> {
        let defaults = Self::defaults();

        let Some(json) = custom_rules_json.map(str::trim).filter(|s| !s.is_empty()) else {
            return Outcome::clean(defaults);
        };

        match Self::parse_rules(json) {
            Ok(custom) => {
                let names: Vec<&str> = custom.iter().map(Rule::ecosystem).collect();
                info!(
                    "Successfully parsed custom ecosystem map, prepending {} rule(s) to defaults: {:?}",
                    custom.len(),
                    names
                );
                Outcome::clean(defaults.prepend(custom))
            }
            Err(e) => {
                warn!("{}. Using default ecosystem map only.", e);
                Outcome::degraded(defaults, e)
            }
        }
    }

    /// Returns a new set with `rules` evaluated before the current ones.
    pub fn prepend(self, mut rules: Vec<Rule>) -> Self {
        rules.extend(self.rules);
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Distinct ecosystem names this set can detect.
    pub fn ecosystems(&self) -> BTreeSet<&str> {
        self.rules.iter().map(Rule::ecosystem).collect()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

fn patterns(ecosystem: &str, patterns: &[&str]) -> RuleSpec {
    RuleSpec {
        ecosystem: ecosystem.to_string(),
        patterns: patterns.iter().map(|p| p.to_string()).collect(),
        heuristics: Vec::new(),
    }
}

fn heuristics(ecosystem: &str, heuristics: &[(&[&str], &[&str])]) -> RuleSpec {
    RuleSpec {
        ecosystem: ecosystem.to_string(),
        patterns: Vec::new(),
        heuristics: heuristics
            .iter()
            .map(|(present, absent)| HeuristicSpec {
                present: present.iter().map(|p| p.to_string()).collect(),
                absent: absent.iter().map(|p| p.to_string()).collect(),
            })
            .collect(),
    }
}

// See https://docs.github.com/en/code-security/dependabot/working-with-dependabot/dependabot-options-reference#package-ecosystem-
fn default_specs() -> Vec<RuleSpec> {
    vec![
        heuristics("uv", &[(&["uv.lock"], &[])]),
        heuristics(
            "pip",
            &[
                (&["pdm.lock", "pyproject.toml"], &[]),
                (&["poetry.lock", "pyproject.toml"], &[]),
                (&["Pipfile.lock"], &[]),
                (&["Pipfile"], &[]),
                (&["requirements.txt"], &[]),
                (&["requirements.in"], &[]),
                (&["pyproject.toml"], &["uv.lock"]),
            ],
        ),
        patterns("bun", &["bun.lockb", "bun.lock"]),
        patterns("bundler", &["Gemfile"]),
        patterns("cargo", &["Cargo.toml"]),
        patterns("composer", &["composer.json"]),
        patterns("devcontainers", &["devcontainer.json"]),
        patterns("docker-compose", &["docker-compose.yml", "docker-compose.yaml"]),
        patterns("docker", &["Dockerfile"]),
        patterns("elm", &["elm.json"]),
        patterns("gitsubmodule", &[".gitmodules"]),
        patterns("gomod", &["go.mod"]),
        patterns("gradle", &["build.gradle", "build.gradle.kts"]),
        patterns("helm", &["Chart.yaml"]),
        patterns("maven", &["pom.xml"]),
        patterns("mix", &["mix.exs"]),
        patterns("npm", &["package.json"]),
        patterns(
            "nuget",
            &["*.csproj", "*.vbproj", "*.fsproj", "packages.config", "global.json"],
        ),
        patterns("pub", &["pubspec.yaml"]),
        patterns("swift", &["Package.swift"]),
        patterns("terraform", &["*.tf", "*.tf.json"]),
    ]
}
