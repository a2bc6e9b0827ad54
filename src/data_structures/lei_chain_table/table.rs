// Copyright (c) 2025 Wehewehe Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Core implementation of the Lei Chain Table.

use super::error::Result;
use super::hash::PolynomialHasher;

/// One key-value pair stored in a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: String,
    value: String,
}

impl Entry {
    /// Returns the key of this entry.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the value of this entry.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The ordered collision chain of one bucket. Index 0 is the chain head.
type Chain = Vec<Entry>;

/// Distribution statistics for a [`LeiChainTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainStats {
    /// Number of buckets holding at least one entry.
    pub occupied_buckets: usize,
    /// Number of buckets holding no entry.
    pub empty_buckets: usize,
    /// Length of the longest chain.
    pub longest_chain: usize,
    /// Entries per bucket, shadow entries included.
    pub load_factor: f64,
}

/// A fixed-capacity hash table with separate chaining.
///
/// The bucket count is chosen at construction and never changes. New entries
/// are appended to the tail of their bucket's chain, and a lookup returns the
/// first entry with a matching key, so when a key is inserted more than once
/// the earliest value wins and later ones stay in the chain as unreachable
/// shadows.
#[derive(Debug, Clone)]
pub struct LeiChainTable {
    buckets: Vec<Chain>,
    hasher: PolynomialHasher,
    entry_count: usize,
}

impl LeiChainTable {
    /// Creates an empty table with `capacity` buckets.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The fixed number of buckets.
    ///
    /// # Returns
    ///
    /// * `Ok(LeiChainTable)` - An empty table.
    /// * `Err(LeiChainTableError::InvalidCapacity)` - If `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        let hasher = PolynomialHasher::new(capacity)?;
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Chain::new);

        Ok(Self {
            buckets,
            hasher,
            entry_count: 0,
        })
    }

    /// Returns the bucket index for `key`.
    pub fn hash(&self, key: &str) -> usize {
        self.hasher.index_of(key)
    }

    /// Appends a key-value pair to the tail of the key's chain.
    ///
    /// No uniqueness check is made. Inserting a key that is already present
    /// adds a shadow entry that [`lookup`](Self::lookup) will never return.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let index = self.hash(&key);

        let chain = &mut self.buckets[index];
        tracing::trace!(key = %key, bucket = index, position = chain.len(), "Inserting entry");
        chain.push(Entry {
            key,
            value: value.into(),
        });
        self.entry_count += 1;
    }

    /// Looks up the value of the first entry whose key equals `key`.
    ///
    /// Keys are compared exactly; no case folding is applied.
    ///
    /// # Returns
    ///
    /// * `Some(value)` - The earliest inserted value for `key`.
    /// * `None` - If `key` was never inserted.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let index = self.hash(key);
        self.buckets[index]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Returns whether `key` has at least one entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Returns the fixed number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of stored entries, shadow entries included.
    pub fn len(&self) -> usize {
        self.entry_count
    }

    /// Returns whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Returns the ratio of entries to buckets.
    pub fn load_factor(&self) -> f64 {
        self.entry_count as f64 / self.capacity() as f64
    }

    /// Returns the chain length of the bucket at `index`, or `None` when the
    /// index is out of range.
    pub fn chain_len(&self, index: usize) -> Option<usize> {
        self.chain(index).map(<[Entry]>::len)
    }

    /// Returns the chain of the bucket at `index`, head first.
    pub fn chain(&self, index: usize) -> Option<&[Entry]> {
        self.buckets.get(index).map(Vec::as_slice)
    }

    /// Iterates over all entries in bucket order, then chain order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.buckets.iter().flatten()
    }

    /// Computes bucket distribution statistics.
    pub fn stats(&self) -> ChainStats {
        let occupied_buckets = self.buckets.iter().filter(|c| !c.is_empty()).count();
        let longest_chain = self.buckets.iter().map(Vec::len).max().unwrap_or(0);

        ChainStats {
            occupied_buckets,
            empty_buckets: self.capacity() - occupied_buckets,
            longest_chain,
            load_factor: self.load_factor(),
        }
    }
}

impl<'a> IntoIterator for &'a LeiChainTable {
    type Item = &'a Entry;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Chain>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter().flatten()
    }
}
