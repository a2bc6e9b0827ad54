//! Interactive query loop.
//!
//! Reads one word per line, answers from a [`LeiChainTable`], and stops on the
//! configured terminator or at end of input. Words are looked up exactly as
//! typed after trimming; callers are expected to enter lowercase.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::ReplConfig;
use crate::data_structures::lei_chain_table::LeiChainTable;
use crate::error::WeheweheResult;

/// Formats the answer line for `word`.
///
/// # Examples
///
/// ```
/// use wehewehe_lib::data_structures::lei_chain_table::LeiChainTable;
/// use wehewehe_lib::dictionary::describe;
///
/// let mut table = LeiChainTable::new(100).unwrap();
/// table.insert("cat", "a small domesticated carnivore");
///
/// assert_eq!(describe(&table, "cat", "missing"), "'cat': a small domesticated carnivore");
/// assert_eq!(describe(&table, "bird", "missing"), "'bird': missing");
/// ```
pub fn describe(table: &LeiChainTable, word: &str, not_found_message: &str) -> String {
    format_answer(word, table.lookup(word), not_found_message)
}

fn format_answer(word: &str, definition: Option<&str>, not_found_message: &str) -> String {
    match definition {
        Some(definition) => format!("'{word}': {definition}"),
        None => {
            debug!(word, "Word not found");
            format!("'{word}': {not_found_message}")
        }
    }
}

/// Counters collected over one run of the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Words looked up
    pub queries: usize,
    /// Lookups that found a definition
    pub hits: usize,
    /// Lookups that found nothing
    pub misses: usize,
}

/// Prompt-read-answer loop over arbitrary input and output streams.
#[derive(Debug)]
pub struct QueryLoop<R, W> {
    input: R,
    output: W,
    config: ReplConfig,
}

impl<R: BufRead, W: Write> QueryLoop<R, W> {
    /// Creates a loop reading from `input` and answering on `output`.
    pub fn new(input: R, output: W, config: ReplConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Runs until the terminator is entered or input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an IO error if reading input or writing output fails.
    pub fn run(&mut self, table: &LeiChainTable) -> WeheweheResult<QueryStats> {
        let mut stats = QueryStats::default();
        let mut line = String::new();

        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                // End of input: finish the prompt line
                writeln!(self.output)?;
                break;
            }

            let word = line.trim();
            if word == self.config.terminator {
                break;
            }

            let definition = table.lookup(word);
            stats.queries += 1;
            if definition.is_some() {
                stats.hits += 1;
            } else {
                stats.misses += 1;
            }
            writeln!(
                self.output,
                "{}",
                format_answer(word, definition, &self.config.not_found_message)
            )?;
        }

        debug!(
            queries = stats.queries,
            hits = stats.hits,
            misses = stats.misses,
            "Query loop finished"
        );
        Ok(stats)
    }

    /// Consumes the loop and returns its output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
