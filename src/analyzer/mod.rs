//! # Analyzer Module
//!
//! Detects which package ecosystems a repository uses:
//! - [`rules`]: the rule model and the built-in rule table
//! - [`matcher`]: evaluates one rule condition against a directory listing
//! - [`detector`]: applies a whole rule set to one directory
//! - [`scanner`]: walks the tree and collects matching directories
//! - [`aggregator`]: groups directories by ecosystem for rendering

pub mod aggregator;
pub mod detector;
pub mod matcher;
pub mod outcome;
pub mod rules;
pub mod scanner;

pub use aggregator::{EcosystemGrouping, aggregate};
pub use detector::{detect, try_detect};
pub use outcome::{Outcome, Warning};
pub use rules::{Condition, Heuristic, HeuristicSpec, Rule, RuleSet, RuleSpec};
pub use scanner::{ROOT_TOKEN, ScanResult, canonical_token, scan};

use std::path::Path;

/// Scans `root` and groups the detected directories by ecosystem.
pub fn analyze_ecosystems(
    root: &Path,
    ignore_list: &[String],
    rules: &RuleSet,
) -> Outcome<EcosystemGrouping> {
    let (scan_result, warnings) = scan(root, ignore_list, rules).into_parts();
    let grouping = aggregate(root, scan_result.directories(), rules);
    Outcome::with_warnings(grouping, warnings)
}
