use crate::{
    analyzer::{self, EcosystemGrouping, RuleSet, Warning},
    error::DependabotGenError,
    generator,
};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub scan_path: PathBuf,
    pub interval: String,
    pub output_path: PathBuf,
    pub ignore_dirs: Vec<String>,
    pub custom_map: Option<String>,
    pub dry_run: bool,
    pub json: bool,
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub grouping: EcosystemGrouping,
    pub document: String,
    /// `None` when nothing was written (dry run or JSON output).
    pub written_to: Option<PathBuf>,
    pub warnings: Vec<Warning>,
}

pub fn handle_generate(options: GenerateOptions) -> crate::Result<GenerateReport> {
    info!(
        "Starting dependabot generation with scan_path: '{}', interval: '{}', output_path: '{}', ignore_dirs: {:?}",
        options.scan_path.display(),
        options.interval,
        options.output_path.display(),
        options.ignore_dirs
    );

    let (rules, mut warnings) = RuleSet::build(options.custom_map.as_deref()).into_parts();

    info!(
        "Scanning for directories with dependency files in '{}'",
        options.scan_path.display()
    );
    let (grouping, scan_warnings) =
        analyzer::analyze_ecosystems(&options.scan_path, &options.ignore_dirs, &rules).into_parts();
    warnings.extend(scan_warnings);

    info!("Generating dependabot configuration");
    let document = generator::render_dependabot_config(&grouping, &options.interval)?;

    let written_to = if options.json {
        println!("{}", serde_json::to_string_pretty(&grouping)?);
        None
    } else if options.dry_run {
        print!("{}", document);
        None
    } else {
        write_output(&options.output_path, &document)?;
        info!(
            "Dependabot configuration generated at '{}'",
            options.output_path.display()
        );
        Some(options.output_path.clone())
    };

    Ok(GenerateReport {
        grouping,
        document,
        written_to,
        warnings,
    })
}

/// Creates the parent directory if needed and writes the document.
fn write_output(path: &Path, document: &str) -> crate::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            info!("Creating output directory '{}'", parent.display());
            fs::create_dir_all(parent).map_err(|source| DependabotGenError::Output {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    info!("Writing dependabot configuration to '{}'", path.display());
    fs::write(path, document).map_err(|source| DependabotGenError::Output {
        path: path.to_path_buf(),
        source,
    })
}
