//! Core shared types for connector identity descriptors.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod field;
mod info;

/// Error type and result alias shared across the descriptor crates.
pub use error::{Error, Result};
/// Keys recognised in an `info.yaml` descriptor.
pub use field::InfoField;
/// Connector identity record populated from a descriptor.
pub use info::ConnectorInfo;
