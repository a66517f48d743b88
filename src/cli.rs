use crate::config::types::Config;
use crate::handlers::GenerateOptions;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dependabot-generate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a Dependabot configuration from the ecosystems found in a repository")]
#[command(long_about = "Recursively scans a repository for package manager marker files (package.json, go.mod, Cargo.toml, pyproject.toml, Dockerfile, ...) and writes a dependabot.yml with one update entry per detected ecosystem.")]
pub struct Cli {
    /// Recursively scan this path for dependency files
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub scan_path: PathBuf,

    /// Update interval for dependencies [default: weekly]
    #[arg(long, value_name = "INTERVAL")]
    pub interval: Option<String>,

    /// Output file path [default: .github/dependabot.yml]
    #[arg(long, value_name = "FILE")]
    pub output_filepath: Option<PathBuf>,

    /// Comma-separated substrings of directory paths to ignore [default: .venv,node_modules]
    #[arg(long, value_name = "DIRS", value_delimiter = ',')]
    pub ignore_dirs: Option<Vec<String>>,

    /// JSON string to extend the default ecosystem map
    #[arg(long, value_name = "JSON")]
    pub custom_map: Option<String>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the generated configuration instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print the detected ecosystem grouping as JSON instead of writing it
    #[arg(long, conflicts_with = "dry_run")]
    pub json: bool,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }

    /// Merge command line flags over the loaded configuration
    pub fn into_generate_options(self, config: Config) -> GenerateOptions {
        let ignore_dirs = match self.ignore_dirs {
            Some(dirs) => dirs
                .iter()
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())
                .collect(),
            None => config.scan.ignore_dirs,
        };

        GenerateOptions {
            scan_path: self.scan_path,
            interval: self.interval.unwrap_or(config.output.interval),
            output_path: self.output_filepath.unwrap_or(config.output.path),
            ignore_dirs,
            custom_map: self.custom_map.or(config.scan.custom_map),
            dry_run: self.dry_run,
            json: self.json,
        }
    }
}
