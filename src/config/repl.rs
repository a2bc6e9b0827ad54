//! Interactive query loop configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Query loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplConfig {
    /// Text written before each read
    pub prompt: String,

    /// Input that ends the loop
    pub terminator: String,

    /// Answer printed for words that are not in the dictionary
    pub not_found_message: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "Enter a word to find its definition or press # to exit \
                     (word should be in lowercase): "
                .to_string(),
            terminator: "#".to_string(),
            not_found_message: "Word not found in the dictionary.".to_string(),
        }
    }
}

impl Validate for ReplConfig {
    fn validate(&self) -> ConfigResult<()> {
        // A terminator that trims to nothing would collide with blank input
        if self.terminator.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "repl.terminator must contain a visible character".to_string(),
            ));
        }

        if self.terminator.trim() != self.terminator {
            return Err(ConfigError::ValidationError(
                "repl.terminator must not have surrounding whitespace".to_string(),
            ));
        }

        Ok(())
    }
}
