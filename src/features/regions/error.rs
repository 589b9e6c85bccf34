use std::path::PathBuf;

use thiserror::Error;

/// Fatal problems with a bundled dataset, raised while loading at startup.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset '{country}' from {path:?}: {source}")]
    Io {
        country: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line did not split into exactly six fields.
    #[error("Line {line}: expected 6 comma-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    /// A numeric-id dataset contained an id that is not an unsigned integer.
    #[error("Line {line}: invalid numeric {field} '{value}'")]
    InvalidNumericId {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// Following parent links from a node came back to a node already visited.
    #[error("Parent cycle detected at region '{id}'")]
    ParentCycle { id: String },
}

/// Query-time lookup failures. The display strings are the public error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Country not found")]
    CountryNotFound,

    #[error("ID not found")]
    IdNotFound,

    #[error("No matching post code found")]
    NoMatch,
}
