use super::rules::{Condition, Heuristic};
use glob::{MatchOptions, Pattern};
use std::collections::BTreeSet;

/// Glob options following the host filesystem's case convention.
pub fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: !cfg!(windows),
        require_literal_separator: false,
        require_literal_leading_dot: false,
    }
}

/// True if `pattern` matches at least one of `filenames`.
fn any_file_matches(pattern: &Pattern, filenames: &BTreeSet<String>) -> bool {
    let options = match_options();
    filenames.iter().any(|f| pattern.matches_with(f, options))
}

fn heuristic_matches(heuristic: &Heuristic, filenames: &BTreeSet<String>) -> bool {
    let all_present = heuristic
        .present
        .iter()
        .all(|p| any_file_matches(p, filenames));
    let none_absent = !heuristic
        .absent
        .iter()
        .any(|p| any_file_matches(p, filenames));
    all_present && none_absent
}

/// Decides whether a directory listing satisfies a rule condition.
pub fn matches(condition: &Condition, filenames: &BTreeSet<String>) -> bool {
    match condition {
        Condition::PatternList(patterns) => patterns.iter().any(|p| any_file_matches(p, filenames)),
        Condition::Heuristics(heuristics) => {
            heuristics.iter().any(|h| heuristic_matches(h, filenames))
        }
    }
}
