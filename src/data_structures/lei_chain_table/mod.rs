// Copyright (c) 2025 Wehewehe Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lei Chain Table for word definition lookups.
//!
//! A fixed-capacity hash table that resolves collisions with separate
//! chaining. Each bucket holds an ordered chain of entries, strung together
//! like flowers on a lei. The table is loaded once and queried repeatedly.
//!
//! # Features
//!
//! - Deterministic polynomial string hash (multiplier 31, reduced per character).
//! - Fixed bucket count: the table never resizes or rehashes.
//! - Insertion order is preserved within each chain.
//! - First-write-wins lookups when a key is inserted more than once.
//! - Zero unsafe code.
//!
//! # Example
//!
//! ```
//! use wehewehe_lib::data_structures::lei_chain_table::LeiChainTable;
//!
//! let mut table = LeiChainTable::new(100).unwrap();
//! table.insert("cat", "a small domesticated carnivore");
//! table.insert("dog", "a domesticated canine");
//!
//! assert_eq!(table.lookup("cat"), Some("a small domesticated carnivore"));
//! assert_eq!(table.lookup("bird"), None);
//! ```
//!
//! # Duplicate Keys
//!
//! Inserting an existing key does not replace its value. The new entry is
//! appended behind the old one and stays unreachable:
//!
//! ```
//! use wehewehe_lib::data_structures::lei_chain_table::LeiChainTable;
//!
//! let mut table = LeiChainTable::new(100).unwrap();
//! table.insert("owl", "a nocturnal bird");
//! table.insert("owl", "a wise bird");
//!
//! assert_eq!(table.lookup("owl"), Some("a nocturnal bird"));
//! assert_eq!(table.len(), 2);
//! ```
//!
//! # Concurrency
//!
//! `insert` takes `&mut self` and `lookup` takes `&self`, so a table shared
//! across threads must finish loading before readers see it, or be wrapped
//! in a lock by the caller.

// Module declarations
mod error;
mod hash;
mod table;

// Re-exports
pub use error::{LeiChainTableError, Result};
pub use hash::{polynomial_hash, PolynomialHasher, HASH_MULTIPLIER};
pub use table::{ChainStats, Entry, LeiChainTable};

/// Bucket count used when nothing else is configured.
pub const DEFAULT_CAPACITY: usize = 100;
