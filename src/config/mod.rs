pub mod types;

use crate::error::{ConfigError, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".dependabot-generate.toml";

/// Get the global config file path (~/.dependabot-generate.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (scan root/.dependabot-generate.toml)
pub fn local_config_path(project_path: &Path) -> PathBuf {
    project_path.join(CONFIG_FILE_NAME)
}

/// Parse a config file, failing on unreadable or malformed content
pub fn read_config_file(path: &Path) -> std::result::Result<types::Config, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| ConfigError::ParsingFailed(format!("{}: {}", path.display(), e)))
}

/// Load configuration.
///
/// An explicitly requested file must load. Otherwise the local config is tried
/// first, then the global one; a broken implicit file is logged and skipped.
pub fn load_config(explicit: Option<&Path>, project_path: &Path) -> Result<types::Config> {
    if let Some(path) = explicit {
        debug!("Loading config from {}", path.display());
        return Ok(read_config_file(path)?);
    }

    let candidates = std::iter::once(local_config_path(project_path)).chain(global_config_path());
    for path in candidates {
        if !path.exists() {
            continue;
        }
        match read_config_file(&path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
            Err(e) => warn!("Ignoring config file: {}", e),
        }
    }

    Ok(types::Config::default())
}
