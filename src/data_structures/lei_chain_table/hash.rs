// Copyright (c) 2025 Wehewehe Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Polynomial string hashing for the Lei Chain Table.
//!
//! Keys are hashed with Horner's rule over their Unicode code points using a
//! multiplier of 31. The accumulator is reduced modulo the bucket count after
//! every character, so the result is always a valid bucket index and the
//! accumulator never grows with the key length.

use super::error::{LeiChainTableError, Result};

/// Multiplier applied to the accumulator before each character is added.
pub const HASH_MULTIPLIER: u128 = 31;

/// Computes the bucket index of `key` for a table of `capacity` buckets.
///
/// The empty string hashes to 0. Intermediate values are held in `u128`,
/// which cannot overflow: the accumulator stays below `capacity`, so
/// `acc * 31 + char::MAX` fits for every `usize` capacity.
///
/// # Arguments
///
/// * `key` - The key to hash.
/// * `capacity` - The number of buckets. Must be greater than 0.
///
/// # Returns
///
/// The bucket index in `[0, capacity)`.
///
/// # Errors
///
/// Returns [`LeiChainTableError::InvalidCapacity`] when `capacity` is 0.
pub fn polynomial_hash(key: &str, capacity: usize) -> Result<usize> {
    let hasher = PolynomialHasher::new(capacity)?;
    Ok(hasher.index_of(key))
}

/// Maps keys onto the buckets of a fixed-capacity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolynomialHasher {
    capacity: usize,
}

impl PolynomialHasher {
    /// Creates a hasher for a table with `capacity` buckets.
    ///
    /// # Errors
    ///
    /// Returns [`LeiChainTableError::InvalidCapacity`] when `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(LeiChainTableError::InvalidCapacity(capacity));
        }
        Ok(Self { capacity })
    }

    /// Returns the bucket index for `key`.
    pub fn index_of(&self, key: &str) -> usize {
        let modulus = self.capacity as u128;
        let index = key.chars().fold(0u128, |acc, ch| {
            (acc * HASH_MULTIPLIER + u128::from(u32::from(ch))) % modulus
        });
        // index < capacity, which is itself a usize
        index as usize
    }

    /// Returns the number of buckets this hasher distributes keys over.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
