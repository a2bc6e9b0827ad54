//! Wehewehe Library
//!
//! This library contains the core components of Wehewehe, a word dictionary
//! that is loaded once from a `word:definition` text file and queried
//! repeatedly. The library is designed to be used by the binary crate, but
//! can also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - [`data_structures::lei_chain_table`] is the fixed-capacity chained hash table.
//! - [`dictionary`] loads text sources into a table and runs the query loop.
//! - [`config`] layers defaults, a config file and environment overrides.
//! - [`error`] holds the error types and the global error reporter.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Wehewehe.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Routes reported errors through `tracing`.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
