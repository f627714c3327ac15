//! Error types for descriptor loading.

use connector_primitives::{Error as RecordError, InfoField};
use thiserror::Error;

/// Errors emitted while loading a descriptor.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The descriptor could not be read (missing, unreadable, no permission).
    #[error("failed to read descriptor {origin}: {source}")]
    Read {
        /// Where the descriptor was expected.
        origin: String,
        /// Source [`std::io::Error`].
        source: std::io::Error,
    },
    /// The descriptor was read but could not be decoded into a record.
    #[error("failed to parse descriptor {origin}: {source}")]
    Parse {
        /// Where the descriptor came from.
        origin: String,
        /// Decoding failure reported by the record type.
        source: RecordError,
    },
    /// Strict loading finished with fields still empty.
    #[error("descriptor {origin} is missing {}", join_keys(.missing))]
    Incomplete {
        /// Where the descriptor came from.
        origin: String,
        /// Fields left empty after loading.
        missing: Vec<InfoField>,
    },
    /// The loader configuration was invalid.
    #[error("invalid loader configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Result type alias for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

fn join_keys(fields: &[InfoField]) -> String {
    fields
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ")
}
