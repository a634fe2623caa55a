//! Error types for tablature operations.
//!
//! Every fallible operation reports through [`Error`]; nothing in this
//! workspace panics on bad input or bad indices. Callers on hosts and
//! on small targets alike can match on [`ErrorKind`] and recover.

use thiserror::Error;

use crate::value::{Kind, Value};

/// Result type for tablature operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An error produced by a table, row, or transform operation.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error.
    pub kind: ErrorKind,
}

/// The specific kind of error that occurred.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ErrorKind {
    /// An index was past the end of a row, list, or table.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The length of the indexed sequence.
        length: usize,
    },
    /// A value had a different kind than the operation required.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The kind the operation required.
        expected: Kind,
        /// The kind actually found.
        actual: Kind,
    },
    /// No column is registered under the given name.
    #[error("column not found: {0}")]
    ColumnNotFound(String),
    /// No row is registered under the given key.
    #[error("row key not found: {0}")]
    RowKeyNotFound(String),
    /// No row holds the given value in the given column.
    #[error("no row matches {value} in column {column}")]
    ValueNotFound {
        /// The column that was searched.
        column: String,
        /// The value that was searched for.
        value: Value,
    },
    /// A rotation anchor value does not occur in the sequence.
    #[error("anchor not found: {0}")]
    AnchorNotFound(Value),
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an index-out-of-bounds error.
    #[must_use]
    pub const fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Creates a type-mismatch error.
    #[must_use]
    pub const fn type_mismatch(expected: Kind, actual: Kind) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates a column-not-found error.
    #[must_use]
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::ColumnNotFound(name.into()))
    }

    /// Creates a row-key-not-found error.
    #[must_use]
    pub fn row_key_not_found(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::RowKeyNotFound(key.into()))
    }

    /// Creates a value-not-found error for a column search.
    #[must_use]
    pub fn value_not_found(column: impl Into<String>, value: Value) -> Self {
        Self::new(ErrorKind::ValueNotFound {
            column: column.into(),
            value,
        })
    }

    /// Creates an anchor-not-found error.
    #[must_use]
    pub const fn anchor_not_found(anchor: Value) -> Self {
        Self::new(ErrorKind::AnchorNotFound(anchor))
    }

    /// Returns true if this error is an out-of-bounds index.
    #[must_use]
    pub const fn is_index_error(&self) -> bool {
        matches!(self.kind, ErrorKind::IndexOutOfBounds { .. })
    }

    /// Returns true if this error is a kind mismatch.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::TypeMismatch { .. })
    }

    /// Returns true if this error reports a failed lookup of any sort:
    /// a missing column, row key, cell value, or rotation anchor.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ColumnNotFound(_)
                | ErrorKind::RowKeyNotFound(_)
                | ErrorKind::ValueNotFound { .. }
                | ErrorKind::AnchorNotFound(_)
        )
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}
