//! Dictionary source configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default dictionary file, relative to the working directory.
pub const DEFAULT_DICTIONARY_PATH: &str = "dictionary.txt";

/// Default separator between a word and its definition.
pub const DEFAULT_DELIMITER: &str = ":";

/// Dictionary source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Path of the `word:definition` text file
    pub path: PathBuf,

    /// Field separator for each line
    pub delimiter: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary.path must not be empty".to_string(),
            ));
        }

        if self.delimiter.is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary.delimiter must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
