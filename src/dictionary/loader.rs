//! Dictionary loader.
//!
//! Builds a [`LeiChainTable`] from `word:definition` lines. Lines that do not
//! split into exactly two fields are skipped. A source that cannot be read is
//! reported and yields whatever was loaded before the failure.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::{DictionaryConfig, TableConfig};
use crate::config::dictionary::DEFAULT_DELIMITER;
use crate::data_structures::lei_chain_table::{LeiChainTable, DEFAULT_CAPACITY};
use crate::error::loader::LoaderError;
use crate::error::{report_error, ErrorContext, WeheweheResult};

/// Splits `line` into a word and its definition.
///
/// Surrounding whitespace is trimmed from the line first. The line is then
/// split on every occurrence of `delimiter` and accepted only when exactly two
/// fields result, so `a:b:c` and lines with no delimiter are rejected.
///
/// # Examples
///
/// ```
/// use wehewehe_lib::dictionary::parse_line;
///
/// assert_eq!(parse_line("fox:a swift animal\n", ":"), Some(("fox", "a swift animal")));
/// assert_eq!(parse_line("no delimiter here", ":"), None);
/// assert_eq!(parse_line("too:many:fields", ":"), None);
/// ```
pub fn parse_line<'a>(line: &'a str, delimiter: &str) -> Option<(&'a str, &'a str)> {
    let mut fields = line.trim().split(delimiter);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(word), Some(definition), None) => Some((word, definition)),
        _ => None,
    }
}

/// Outcome of a load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines inserted into the table
    pub loaded: usize,

    /// Lines rejected by the parser
    pub skipped: usize,

    /// Message for a source that could not be read, if any
    pub source_error: Option<String>,
}

/// A table together with the report of how it was built.
#[derive(Debug, Clone)]
pub struct LoadedDictionary {
    /// The populated table
    pub table: LeiChainTable,

    /// Counters and errors from the load
    pub report: LoadReport,
}

/// Loads dictionary sources into fixed-capacity tables.
#[derive(Debug, Clone)]
pub struct DictionaryLoader {
    capacity: usize,
    delimiter: String,
}

impl Default for DictionaryLoader {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl DictionaryLoader {
    /// Creates a loader producing tables of `capacity` buckets.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Creates a loader from the validated configuration sections.
    pub fn from_config(dictionary: &DictionaryConfig, table: &TableConfig) -> Self {
        Self::new(table.capacity).with_delimiter(dictionary.delimiter.clone())
    }

    /// Sets the field separator.
    pub fn with_delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Loads every line of `reader`.
    ///
    /// # Errors
    ///
    /// Only an invalid capacity is returned as an error. Read failures are
    /// reported, recorded in [`LoadReport::source_error`] and end the load.
    pub fn load_reader<R: BufRead>(
        &self,
        reader: R,
        source_name: &str,
    ) -> WeheweheResult<LoadedDictionary> {
        let mut table = LeiChainTable::new(self.capacity)?;
        let mut report = LoadReport::default();

        for (number, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(error) => {
                    let error = LoaderError::from_io(source_name, error);
                    report.source_error = Some(error.to_string());
                    report_error(
                        ErrorContext::new(error, "dictionary_loader")
                            .with_details(format!("stopped at line {}", number + 1)),
                    );
                    break;
                }
            };

            match parse_line(&line, &self.delimiter) {
                Some((word, definition)) => {
                    table.insert(word, definition);
                    report.loaded += 1;
                }
                None => {
                    debug!(line = number + 1, source = source_name, "Skipping malformed line");
                    report.skipped += 1;
                }
            }
        }

        let stats = table.stats();
        info!(
            source = source_name,
            loaded = report.loaded,
            skipped = report.skipped,
            load_factor = stats.load_factor,
            longest_chain = stats.longest_chain,
            "Dictionary loaded"
        );
        if stats.load_factor > 1.0 {
            warn!(
                capacity = table.capacity(),
                entries = table.len(),
                "Table holds more entries than buckets; lookups will walk long chains"
            );
        }

        Ok(LoadedDictionary { table, report })
    }

    /// Loads the dictionary file at `path`.
    ///
    /// A missing or unreadable file is reported and produces an empty table.
    ///
    /// # Errors
    ///
    /// Only an invalid capacity is returned as an error.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> WeheweheResult<LoadedDictionary> {
        let path = path.as_ref();
        let source_name = path.display().to_string();

        match File::open(path) {
            Ok(file) => self.load_reader(BufReader::new(file), &source_name),
            Err(error) => {
                let table = LeiChainTable::new(self.capacity)?;
                let error = LoaderError::from_io(path, error);
                let report = LoadReport {
                    source_error: Some(error.to_string()),
                    ..LoadReport::default()
                };
                report_error(ErrorContext::new(error, "dictionary_loader"));
                Ok(LoadedDictionary { table, report })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_shapes() {
        assert_eq!(parse_line("cat:a feline", ":"), Some(("cat", "a feline")));
        assert_eq!(parse_line("  cat:a feline  \r\n", ":"), Some(("cat", "a feline")));
        assert_eq!(parse_line("cat:", ":"), Some(("cat", "")));
        assert_eq!(parse_line(":orphan", ":"), Some(("", "orphan")));
        assert_eq!(parse_line("", ":"), None);
        assert_eq!(parse_line("cat", ":"), None);
        assert_eq!(parse_line("time:12:30", ":"), None);
    }

    #[test]
    fn test_parse_line_custom_delimiter() {
        assert_eq!(parse_line("cat=a feline", "="), Some(("cat", "a feline")));
        assert_eq!(parse_line("cat => a feline", " => "), Some(("cat", "a feline")));
        assert_eq!(parse_line("cat:a feline", "="), None);
    }

    #[test]
    fn test_invalid_capacity_propagates() {
        let loader = DictionaryLoader::new(0);
        assert!(loader.load_reader("a:b".as_bytes(), "inline").is_err());
        assert!(loader.load_file("/definitely/not/here.txt").is_err());
    }
}
