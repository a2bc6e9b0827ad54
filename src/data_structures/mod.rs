//! Data structures for Wehewehe.
//!
//! This module contains the lookup structures backing the dictionary.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Deterministic behavior for a given input sequence
//! - Errors are returned, never panicked

pub mod lei_chain_table;

// Re-export common data structures
pub use lei_chain_table::{LeiChainTable, LeiChainTableError};
