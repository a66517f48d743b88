use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DependabotGenError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Template rendering failed: {0}")]
    Template(#[from] tera::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write output '{}': {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Problems with user supplied configuration: ecosystem rule overrides and
/// config files.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to parse custom ecosystem map: {0}")]
    ParseError(String),

    #[error("Invalid rule for ecosystem '{ecosystem}': {reason}")]
    InvalidRule { ecosystem: String, reason: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Failed to read config file: {0}")]
    IoError(String),

    #[error("Failed to parse config file: {0}")]
    ParsingFailed(String),
}

/// Recoverable conditions hit while walking the tree. None of them abort a scan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    #[error("Scan root '{}' does not exist", .0.display())]
    RootMissing(PathBuf),

    #[error("Scan root '{}' is not a directory", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("Could not read directory '{}': {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, DependabotGenError>;
