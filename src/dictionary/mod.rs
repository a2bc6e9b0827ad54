//! Dictionary front end.
//!
//! The loader turns a `word:definition` text source into a
//! [`LeiChainTable`](crate::data_structures::LeiChainTable); the query loop
//! answers lookups against it. Neither holds state beyond the table they are
//! handed.

mod loader;
mod repl;

pub use loader::{parse_line, DictionaryLoader, LoadReport, LoadedDictionary};
pub use repl::{describe, QueryLoop, QueryStats};
