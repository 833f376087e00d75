use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Scenario, Step};

/// Errors that can occur when loading a scenario.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read scenario file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse scenario file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Scenario validation failed: {message}")]
    ValidationError { message: String },
}

impl Scenario {
    /// Returns the path of the default scenario file.
    ///
    /// Uses `~/.config/viewstack/scenario.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("viewstack").join("scenario.toml")
    }

    /// Loads the scenario from the default path.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Reads, parses and validates a scenario file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let scenario: Scenario = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        scenario.validate()?;
        tracing::debug!(
            path = %path.display(),
            views = scenario.views.len(),
            steps = scenario.steps.len(),
            "scenario loaded"
        );
        Ok(scenario)
    }

    /// Validates the scenario.
    ///
    /// Checks:
    /// - View ids are non-empty and unique
    /// - Every step refers to declared views only
    /// - `open` and `push` steps name at least one view
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut ids = HashSet::new();
        for view in &self.views {
            if view.id.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("View '{}' has an empty id", view.display_name),
                });
            }
            if !ids.insert(view.id.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("View id '{}' is declared more than once", view.id),
                });
            }
        }

        for (index, step) in self.steps.iter().enumerate() {
            if matches!(step, Step::Open { path: v, .. } | Step::Push { views: v, .. } if v.is_empty())
            {
                return Err(ConfigError::ValidationError {
                    message: format!("Step {} ({}) names no views", index + 1, step),
                });
            }
            if let Some(unknown) = step.view_ids().into_iter().find(|id| !ids.contains(id)) {
                return Err(ConfigError::ValidationError {
                    message: format!("Step {} refers to unknown view '{}'", index + 1, unknown),
                });
            }
        }

        Ok(())
    }
}
