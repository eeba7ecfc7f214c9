//! Path management for the cost estimator
//!
//! Only the settings file lives on disk; estimates themselves are never
//! persisted.
//!
//! ## Path Resolution Order
//!
//! 1. `ESTIMATOR_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/cost-estimator` or `~/.config/cost-estimator`
//! 3. Windows: `%APPDATA%\cost-estimator`

use std::path::PathBuf;

use crate::error::EstimatorError;

/// Environment variable overriding the config directory
pub const DATA_DIR_ENV: &str = "ESTIMATOR_DATA_DIR";

/// Manages all paths used by the estimator
#[derive(Debug, Clone)]
pub struct EstimatorPaths {
    base_dir: PathBuf,
}

impl EstimatorPaths {
    /// Resolve the config directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, EstimatorError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/cost-estimator/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), EstimatorError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            EstimatorError::Io(format!("Failed to create config directory: {}", e))
        })
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, EstimatorError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                EstimatorError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("cost-estimator"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, EstimatorError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| EstimatorError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("cost-estimator"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EstimatorPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        std::env::set_var(DATA_DIR_ENV, custom_path);
        let paths = EstimatorPaths::new().unwrap();
        std::env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EstimatorPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
