use crate::primitives::ansi::{is_sgr_code, sgr};
use crate::view::theme::Tag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Main configuration structure, read from `~/.lsirc`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color overrides: tag key (e.g. "dir", "red") -> SGR parameter list.
    /// `["4", "36"]` becomes `ESC[4mESC[36m`.
    #[serde(default)]
    pub colors: BTreeMap<String, Vec<String>>,

    /// Text printed between the tree glyph and the item name
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Sidecar holding a directory's own description
    #[serde(default = "default_description_name")]
    pub description_name: String,

    /// Sidecar holding descriptions for the files of a directory
    #[serde(default = "default_file_description_name")]
    pub file_description_name: String,

    /// Ask before listing more than this many items (0 disables the prompt)
    #[serde(default)]
    pub limit_file_num: usize,

    /// Only show this many lines of each description
    #[serde(default)]
    pub description_lines: Option<usize>,
}

fn default_indent() -> String {
    "── ".to_string()
}

fn default_description_name() -> String {
    ".description.lsi".to_string()
}

fn default_file_description_name() -> String {
    ".file_description.lsi".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colors: BTreeMap::new(),
            indent: default_indent(),
            description_name: default_description_name(),
            file_description_name: default_file_description_name(),
            limit_file_num: 0,
            description_lines: None,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, params) in &self.colors {
            if Tag::from_config_key(key).is_none() {
                return Err(ConfigError::ValidationError(format!(
                    "unknown color key \"{key}\""
                )));
            }
            for param in params {
                if !is_sgr_code(&sgr(param)) {
                    return Err(ConfigError::ValidationError(format!(
                        "color \"{key}\": \"{param}\" is not an SGR parameter list like \"1;31\""
                    )));
                }
            }
        }

        if self.description_name.is_empty() || self.file_description_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "description file names cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
