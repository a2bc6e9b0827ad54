//! Test modules for Wehewehe.
//!
//! This module contains the in-crate testing infrastructure:
//! - Unit tests for each component
//! - Property-based tests using proptest
//! - Test fixtures and utilities

pub mod lei_chain_table_tests;
pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    dictionary_line_strategy, key_strategy, RecordingErrorReporter, TestFixture,
};
