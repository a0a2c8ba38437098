use std::path::{Path, PathBuf};

use super::core::GeneratorConfig;
use crate::errors::GenerateError;

/// Name of the configuration file searched for.
pub const CONFIG_FILE_NAME: &str = ".testgen.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse and validate configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<GeneratorConfig, GenerateError> {
    let config = toml::from_str::<GeneratorConfig>(contents).map_err(|e| {
        GenerateError::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
    })?;
    config.validate()?;
    Ok(config)
}

/// Load one configuration file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<GeneratorConfig>, GenerateError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(GenerateError::config_with_path(
                format!("Failed to read config file: {}", e),
                path,
            ))
        }
    };

    parse_config(&contents)
        .map(|config| {
            tracing::debug!(path = %path.display(), "Loaded config");
            Some(config)
        })
        .map_err(|e| GenerateError::config_with_path(e.message(), path))
}

/// `start` and its ancestors, nearest first, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.testgen.toml`.
///
/// The nearest file wins. Defaults apply when none is found.
pub fn load_config_from(start: &Path) -> Result<GeneratorConfig, GenerateError> {
    for dir in directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH) {
        if let Some(config) = load_config_file(&dir.join(CONFIG_FILE_NAME))? {
            return Ok(config);
        }
    }
    tracing::debug!(
        "No config found after checking {} directories. Using default config.",
        MAX_TRAVERSAL_DEPTH
    );
    Ok(GeneratorConfig::default())
}

/// Search from the current directory.
pub fn load_config() -> Result<GeneratorConfig, GenerateError> {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            tracing::warn!("Failed to get current directory: {}. Using default config.", e);
            Ok(GeneratorConfig::default())
        }
    }
}
