use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure, as stored in `.dependabot-generate.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

/// Scan configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Substrings; any directory whose path contains one is skipped
    pub ignore_dirs: Vec<String>,
    /// JSON rule list evaluated ahead of the built-in ecosystem map
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_map: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    /// Dependabot schedule interval (daily, weekly, monthly, ...)
    pub interval: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore_dirs: vec![".venv".to_string(), "node_modules".to_string()],
            custom_map: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".github/dependabot.yml"),
            interval: "weekly".to_string(),
        }
    }
}
