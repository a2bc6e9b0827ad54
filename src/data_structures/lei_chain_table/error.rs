// Copyright (c) 2025 Wehewehe Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lei Chain Table.

/// Errors that can occur in Lei Chain Table operations.
///
/// A failed lookup is not an error: it is reported as `None` by
/// [`LeiChainTable::lookup`](super::LeiChainTable::lookup).
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LeiChainTableError {
    /// The table was asked for a bucket count that cannot hold any entry
    #[error("Invalid table capacity {0}: capacity must be greater than 0")]
    InvalidCapacity(usize),
}

/// Result type for Lei Chain Table operations
pub type Result<T> = std::result::Result<T, LeiChainTableError>;
