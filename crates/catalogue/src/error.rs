//! Error types for the catalogue crate.
//!
//! Only loading can fail. Once a catalogue is built, every query on it is
//! total and returns plain data.

use thiserror::Error;

/// Errors that can occur while loading a movie list into a catalogue
#[derive(Error, Debug)]
pub enum CatalogueError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader could not decode a row
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Row in the movie list couldn't be parsed
    ///
    /// `line` is 1-based and counts the header row.
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogueError>;
