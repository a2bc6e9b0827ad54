//! Dictionary loader error module.
//!
//! These errors describe a dictionary source that could not be read. The
//! loader recovers from them by reporting and continuing with what it has.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a dictionary source.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The dictionary file does not exist.
    #[error("File '{}' not found.", .0.display())]
    SourceNotFound(PathBuf),

    /// The dictionary source exists but could not be read.
    #[error("Failed to read '{source_name}': {error}")]
    SourceRead {
        /// Path or name of the source
        source_name: String,
        /// The underlying IO error
        error: std::io::Error,
    },
}

impl LoaderError {
    /// Classifies an IO error raised while opening or reading `source_name`.
    pub fn from_io(source_name: impl Into<PathBuf>, error: std::io::Error) -> Self {
        let path = source_name.into();
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::SourceNotFound(path)
        } else {
            Self::SourceRead {
                source_name: path.display().to_string(),
                error,
            }
        }
    }
}
