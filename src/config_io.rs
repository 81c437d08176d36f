//! Runtime configuration I/O operations.
//!
//! This module contains home/config directory detection and the loading
//! rules for `~/.lsirc`. The pure configuration model lives in config.rs.

use crate::config::{Config, ConfigError};
use std::path::{Path, PathBuf};

/// Name of the per-user configuration file in the home directory.
pub const LSIRC_NAME: &str = ".lsirc";

/// Centralized directory paths used for configuration lookup.
///
/// Only the binaries' `main` functions should use `dirs::*` to construct this;
/// all other code receives it by parameter passing, so tests can point it at
/// a temp directory.
#[derive(Debug, Clone)]
pub struct DirectoryContext {
    /// User's home directory, where `.lsirc` lives
    pub home_dir: Option<PathBuf>,

    /// Platform config directory (e.g. ~/.config on Linux)
    pub config_dir: Option<PathBuf>,
}

impl DirectoryContext {
    /// Create a DirectoryContext from the system directories
    pub fn from_system() -> Self {
        Self {
            home_dir: dirs::home_dir(),
            config_dir: dirs::config_dir(),
        }
    }

    /// Create a DirectoryContext for testing with a temp directory
    pub fn for_testing(temp_dir: &Path) -> Self {
        Self {
            home_dir: Some(temp_dir.join("home")),
            config_dir: Some(temp_dir.join("config")),
        }
    }

    /// `~/.lsirc`
    pub fn lsirc_path(&self) -> Option<PathBuf> {
        self.home_dir.as_ref().map(|home| home.join(LSIRC_NAME))
    }

    /// `<config_dir>/lsi/config.json`
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config_dir
            .as_ref()
            .map(|dir| dir.join("lsi").join("config.json"))
    }

    /// Candidate config files in lookup order, existing files only.
    pub fn config_search_paths(&self) -> Vec<PathBuf> {
        [self.lsirc_path(), self.config_path()]
            .into_iter()
            .flatten()
            .filter(|p| p.is_file())
            .collect()
    }
}

impl Config {
    /// Load the effective configuration.
    ///
    /// An explicit path must load cleanly. Without one, the first readable
    /// file among the search paths wins; broken files are skipped with a
    /// warning and defaults are used when nothing loads.
    pub fn load(explicit: Option<&Path>, dirs: &DirectoryContext) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            let config = Self::load_from_file(path)?;
            tracing::info!("Loaded config from {}", path.display());
            return Ok(config);
        }

        for path in dirs.config_search_paths() {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    return Ok(config);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to load config from {}: {}, trying next option",
                        path.display(),
                        e
                    );
                }
            }
        }
        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }
}
