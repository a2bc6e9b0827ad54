//! Test utilities and fixtures for Wehewehe.
//!
//! This module provides reusable test components, fixtures, and helpers
//! for property-based and file-based tests.

use parking_lot::Mutex;
use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use std::path::PathBuf;
use tempfile::TempDir;

use crate::error::{ErrorContext, ErrorReporter};

/// Maximum key length for generated test data.
const MAX_KEY_LENGTH: usize = 24;

/// Generate a strategy for arbitrary keys, including non-ASCII characters.
pub fn key_strategy() -> BoxedStrategy<String> {
    proptest::collection::vec(proptest::char::any(), 0..MAX_KEY_LENGTH)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Generate a strategy for well-formed `word:definition` lines.
pub fn dictionary_line_strategy() -> BoxedStrategy<(String, String)> {
    (r"[a-z]{1,12}", r"[a-z][a-z ]{0,30}[a-z]").boxed()
}

/// Test fixture owning a temporary directory for dictionary files.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
        })
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// A path inside the fixture directory that does not exist.
    pub fn missing_path(&self) -> PathBuf {
        self.temp_dir.path().join("missing-dictionary.txt")
    }
}

/// Error reporter that keeps the rendered contexts it receives.
#[derive(Debug, Default)]
pub struct RecordingErrorReporter {
    reports: Mutex<Vec<String>>,
}

impl RecordingErrorReporter {
    /// Rendered contexts reported so far.
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().clone()
    }
}

impl ErrorReporter for RecordingErrorReporter {
    fn report(&self, context: ErrorContext) {
        self.reports.lock().push(context.to_string());
    }
}
