use super::matcher;
use super::rules::RuleSet;
use crate::error::ScanWarning;
use log::{debug, warn};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Names of the regular files directly inside `directory`. Symlinks that
/// resolve to files count as files.
pub fn list_files(directory: &Path) -> Result<BTreeSet<String>, ScanWarning> {
    let entries = fs::read_dir(directory).map_err(|e| ScanWarning::Unreadable {
        path: directory.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut files = BTreeSet::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry in {}: {}", directory.display(), e);
                continue;
            }
        };
        if entry.path().is_file() {
            files.insert(entry.file_name().to_string_lossy().to_string());
        }
    }
    Ok(files)
}

/// Applies every rule to one directory and unions the matched ecosystems.
pub fn try_detect(directory: &Path, rules: &RuleSet) -> Result<BTreeSet<String>, ScanWarning> {
    let files = list_files(directory)?;

    let mut found = BTreeSet::new();
    for rule in rules {
        if matcher::matches(rule.condition(), &files) {
            debug!(
                "Detected {} in {} via {}",
                rule.ecosystem(),
                directory.display(),
                rule.condition().kind()
            );
            found.insert(rule.ecosystem().to_string());
        }
    }
    Ok(found)
}

/// Like [`try_detect`], but an unreadable directory detects nothing.
pub fn detect(directory: &Path, rules: &RuleSet) -> BTreeSet<String> {
    try_detect(directory, rules).unwrap_or_else(|e| {
        warn!("Could not detect ecosystems: {}", e);
        BTreeSet::new()
    })
}
