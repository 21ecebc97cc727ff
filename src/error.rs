//! Error types for benchmark analysis
//!
//! Engine-level failures are explicit errors, never values that could be
//! mistaken for real results. The one degraded-but-continuing path is a
//! missing single-thread baseline, which is represented in the data model as
//! [`crate::observation::Speedup::Undefined`] rather than an error here.

use thiserror::Error;

/// Errors produced while loading, deriving, or exporting benchmark tables
#[derive(Debug, Error)]
pub enum AnalizarError {
    /// A measurement row fails basic validity (non-positive or non-finite
    /// time, zero size or thread count). Fatal: a corrupted ratio must not
    /// propagate into derived metrics.
    #[error("invalid measurement ({size}x{size}, {method}, {threads} threads): {reason}")]
    InvalidMeasurement {
        /// Matrix dimension of the offending row
        size: usize,
        /// Variant of the offending row
        method: String,
        /// Thread count of the offending row
        threads: usize,
        /// What made the row invalid
        reason: String,
    },

    /// An operation that requires rows was given an empty table
    #[error("empty input: {operation} requires at least one observation")]
    EmptyInput {
        /// The operation that was attempted
        operation: String,
    },

    /// The input table file does not exist
    #[error("benchmark table not found: {path}")]
    SourceNotFound {
        /// Path that was tried
        path: String,
    },

    /// A configured column name is absent from the table header
    #[error("schema mismatch: column '{missing}' not found, available: {available:?}")]
    SchemaMismatch {
        /// The configured column that was not found
        missing: String,
        /// Column names the table actually has
        available: Vec<String>,
    },

    /// A cell could not be parsed as the expected type
    #[error("parse error at line {line}, column '{column}': {reason}")]
    ParseError {
        /// 1-based line number in the source table
        line: u64,
        /// Column the cell belongs to
        column: String,
        /// Why parsing failed
        reason: String,
    },

    /// A column mapping is malformed (duplicate names, unknown preset)
    #[error("invalid column mapping: {reason}")]
    InvalidMapping {
        /// Why the mapping was rejected
        reason: String,
    },

    /// An underlying I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        /// Description of the failed operation
        message: String,
    },
}

impl From<std::io::Error> for AnalizarError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Result alias for analizar operations
pub type Result<T> = std::result::Result<T, AnalizarError>;
