use super::detector;
use super::rules::RuleSet;
use super::scanner::{canonical_token, resolve_token};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Ecosystem name to the sorted, deduplicated directories it was found in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EcosystemGrouping {
    groups: BTreeMap<String, Vec<String>>,
}

impl EcosystemGrouping {
    pub fn get(&self, ecosystem: &str) -> Option<&[String]> {
        self.groups.get(ecosystem).map(Vec::as_slice)
    }

    /// Groups in ecosystem name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(eco, dirs)| (eco.as_str(), dirs.as_slice()))
    }

    pub fn ecosystems(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<(String, String)> for EcosystemGrouping {
    /// Builds a grouping from `(ecosystem, directory)` pairs, canonicalizing,
    /// deduplicating and sorting the directories.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut sets: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (ecosystem, dir) in pairs {
            sets.entry(ecosystem).or_default().insert(canonical_token(&dir));
        }
        Self {
            groups: sets
                .into_iter()
                .map(|(eco, dirs)| (eco, dirs.into_iter().collect()))
                .collect(),
        }
    }
}

/// Re-detects every directory token (resolved against `root`) and inverts the
/// result into ecosystem -> directories.
pub fn aggregate<I, S>(root: &Path, directories: I, rules: &RuleSet) -> EcosystemGrouping
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    directories
        .into_iter()
        .flat_map(|dir| {
            let token = canonical_token(dir.as_ref());
            detector::detect(&resolve_token(root, &token), rules)
                .into_iter()
                .map(move |eco| (eco, token.clone()))
        })
        .collect()
}
