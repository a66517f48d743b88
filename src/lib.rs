//! # dependabot-generate
//!
//! Scans a repository for package manager marker files and generates a
//! Dependabot configuration with one update entry per detected ecosystem.
//!
//! ## Features
//!
//! - **Ecosystem Detection**: npm, cargo, pip, uv, gomod, docker, terraform and more,
//!   from plain filename patterns or present/absent heuristics
//! - **Monorepo Aware**: every directory in the tree is checked, and each ecosystem
//!   lists all of the directories it was found in
//! - **Custom Rules**: extra rules supplied as JSON are evaluated ahead of the defaults
//! - **Deterministic Output**: ecosystems and directories are sorted, so reruns on an
//!   unchanged tree produce byte-identical files
//!
//! ## Example
//!
//! ```rust,no_run
//! use dependabot_generate::analyzer::{analyze_ecosystems, RuleSet};
//! use dependabot_generate::generator::render_dependabot_config;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rules = RuleSet::build(None).into_value();
//! let ignore = vec!["node_modules".to_string()];
//! let grouping = analyze_ecosystems(Path::new("./my-project"), &ignore, &rules).into_value();
//! println!("{}", render_dependabot_config(&grouping, "weekly")?);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod handlers;

// Re-export commonly used types and functions
pub use analyzer::{EcosystemGrouping, RuleSet, analyze_ecosystems};
pub use error::{DependabotGenError, Result};
pub use generator::render_dependabot_config;
pub use handlers::*;

use cli::Cli;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs the tool for already parsed arguments.
pub fn run(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref(), &cli.scan_path)?;
    let options = cli.into_generate_options(config);

    let report = handlers::handle_generate(options)?;
    if !report.warnings.is_empty() {
        log::info!("Completed with {} recovered warning(s)", report.warnings.len());
    }
    Ok(())
}
