//! Error types for reading and configuring column formats.

use layered_dependency::DepError;
use thiserror::Error;

/// Errors that can occur while reading a column-formatted treebank.
///
/// Line numbers are 1-based positions in the text handed to the reader.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A row has fewer columns than the layout requires.
    #[error("line {line}: expected {expected} columns, found {found}")]
    MissingColumns {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The id column is not an integer.
    #[error("line {line}: invalid node id {value:?}")]
    InvalidId { line: usize, value: String },

    /// Two rows of one sentence share an id.
    #[error("line {line}: node id {id} appears more than once")]
    DuplicateId { line: usize, id: i32 },

    /// A head or arc names an id that no row of the sentence has.
    #[error("line {line}: head {head} does not name a node in the sentence")]
    UnknownHead { line: usize, head: i32 },

    /// An arc is not `<head id><delimiter><label>`.
    #[error("line {line}: malformed arc {value:?}")]
    MalformedArc { line: usize, value: String },

    /// A feature is not `<key><delimiter><value>`.
    #[error("line {line}: malformed feature {value:?}")]
    MalformedFeature { line: usize, value: String },

    /// A configuration file could not be read.
    #[error("failed to load {path}: {message}")]
    Load { path: String, message: String },

    /// A configuration could not be parsed or is unusable.
    #[error("invalid format config: {message}")]
    Config { message: String },

    #[error(transparent)]
    Tree(#[from] DepError),
}

/// Result type for format operations.
pub type FormatResult<T> = Result<T, FormatError>;
