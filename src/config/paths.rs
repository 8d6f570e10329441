//! Path management for FinPal
//!
//! ## Path Resolution Order
//!
//! 1. `FINPAL_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/finpal` or `~/.config/finpal`
//! 3. Windows: `%APPDATA%\finpal`

use std::path::PathBuf;

use crate::error::FinpalError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FINPAL_DATA_DIR";

/// Manages all paths used by FinPal
#[derive(Debug, Clone)]
pub struct FinpalPaths {
    base_dir: PathBuf,
}

impl FinpalPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application-data directory can be found.
    pub fn new() -> Result<Self, FinpalError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinpalPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the user data file with the given name
    pub fn data_file(&self, file_name: &str) -> PathBuf {
        self.base_dir.join(file_name)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FinpalError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinpalError::Io(format!("Failed to create base directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FinpalError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                FinpalError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("finpal"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FinpalError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FinpalError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("finpal"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinpalPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.data_file("userData.txt"),
            temp_dir.path().join("userData.txt")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = FinpalPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinpalPaths::with_base_dir(temp_dir.path().join("finpal"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
