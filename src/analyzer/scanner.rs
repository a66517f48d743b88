//! Directory tree walk.
//!
//! Every directory under the scan root is checked against the rule set. A
//! directory whose path contains any ignore token is skipped together with
//! its whole subtree. The check is plain substring containment on the walked
//! path, so ignoring `"test"` also hides `"contest"`.

use super::detector;
use super::outcome::{Outcome, Warning};
use super::rules::RuleSet;
use crate::error::ScanWarning;
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Token used for the scan root in every result.
pub const ROOT_TOKEN: &str = "/";

/// Directories that matched at least one ecosystem, keyed by canonical token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    directories: BTreeMap<String, BTreeSet<String>>,
}

impl ScanResult {
    pub fn insert(&mut self, token: String, ecosystems: BTreeSet<String>) {
        self.directories.entry(token).or_default().extend(ecosystems);
    }

    /// Sorted canonical directory tokens.
    pub fn directories(&self) -> Vec<String> {
        self.directories.keys().cloned().collect()
    }

    pub fn ecosystems_in(&self, token: &str) -> Option<&BTreeSet<String>> {
        self.directories.get(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.directories.iter()
    }

    pub fn len(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }
}

fn join_token<S: AsRef<str>>(parts: &[S]) -> String {
    if parts.is_empty() {
        return ROOT_TOKEN.to_string();
    }
    let parts: Vec<&str> = parts.iter().map(AsRef::as_ref).collect();
    format!("/{}", parts.join("/"))
}

/// Normalizes a directory token: `""`, `"."` and `"/"` become [`ROOT_TOKEN`];
/// anything else becomes `/`-prefixed with `/` separators and no trailing
/// separator. `\` is a separator only on Windows.
pub fn canonical_token(token: &str) -> String {
    let normalized = if cfg!(windows) {
        token.replace('\\', "/")
    } else {
        token.to_string()
    };
    let parts: Vec<&str> = normalized
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();
    join_token(&parts)
}

/// Canonical token of `dir` relative to `root`. Path components are joined
/// as-is, so a `\` inside a Unix directory name survives.
pub fn directory_token(root: &Path, dir: &Path) -> String {
    let relative = dir.strip_prefix(root).unwrap_or(dir);
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();
    join_token(&parts)
}

/// Filesystem path a token refers to under `root`.
pub fn resolve_token(root: &Path, token: &str) -> PathBuf {
    let canonical = canonical_token(token);
    let relative = canonical.trim_start_matches('/');
    if relative.is_empty() {
        root.to_path_buf()
    } else {
        root.join(relative)
    }
}

fn ignored_by<'a>(path: &Path, ignore: &[&'a str]) -> Option<&'a str> {
    let path = path.to_string_lossy();
    ignore.iter().copied().find(|token| path.contains(token))
}

fn already_reported(warnings: &[Warning], path: &Path) -> bool {
    warnings.iter().any(|w| {
        matches!(w, Warning::Scan(ScanWarning::Unreadable { path: p, .. }) if p == path)
    })
}

/// Walks `root` and records every directory matching at least one ecosystem.
///
/// A missing or non-directory root yields an empty result with a warning.
/// Unreadable directories are skipped and reported, never fatal.
pub fn scan(root: &Path, ignore_list: &[String], rules: &RuleSet) -> Outcome<ScanResult> {
    if !root.exists() {
        let warning = ScanWarning::RootMissing(root.to_path_buf());
        warn!("{}", warning);
        return Outcome::degraded(ScanResult::default(), warning);
    }
    if !root.is_dir() {
        let warning = ScanWarning::RootNotDirectory(root.to_path_buf());
        warn!("{}", warning);
        return Outcome::degraded(ScanResult::default(), warning);
    }

    let ignore: Vec<&str> = ignore_list
        .iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect();

    let mut result = ScanResult::default();
    let mut warnings: Vec<Warning> = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            if !entry.file_type().is_dir() {
                return true;
            }
            match ignored_by(entry.path(), &ignore) {
                Some(token) => {
                    debug!(
                        "Skipping ignored directory: {} (matches '{}')",
                        entry.path().display(),
                        token
                    );
                    false
                }
                None => true,
            }
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                if !already_reported(&warnings, &path) {
                    let warning = ScanWarning::Unreadable {
                        path,
                        reason: err.to_string(),
                    };
                    warn!("{}", warning);
                    warnings.push(warning.into());
                }
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        match detector::try_detect(entry.path(), rules) {
            Ok(found) if found.is_empty() => {}
            Ok(found) => {
                let token = directory_token(root, entry.path());
                debug!("{} -> {:?}", token, found);
                result.insert(token, found);
            }
            Err(warning) => {
                warn!("{}", warning);
                warnings.push(warning.into());
            }
        }
    }

    info!(
        "Found {} directories with dependency files: {:?}",
        result.len(),
        result.directories()
    );
    Outcome::with_warnings(result, warnings)
}
