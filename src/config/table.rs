//! Table configuration module.
//!
//! Sizing of the lookup table built from the dictionary.

use super::{ConfigResult, Validate};
use crate::data_structures::lei_chain_table::DEFAULT_CAPACITY;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Lookup table configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Fixed number of buckets. The table never grows past this.
    pub capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Validate for TableConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.capacity == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "table.capacity".to_string(),
                message: "capacity must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
