//! Shared error definitions for connector primitives.

use serde_yaml::Error as YamlError;
use thiserror::Error;

/// Result alias used throughout the descriptor crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding a descriptor into a record.
#[derive(Debug, Error)]
pub enum Error {
    /// The descriptor bytes are not valid YAML (or not valid UTF-8).
    #[error("invalid descriptor yaml: {source}")]
    Yaml {
        /// Source error from the YAML parser.
        #[from]
        source: YamlError,
    },

    /// The top-level document is something other than a key-value mapping.
    #[error("descriptor must be a mapping, found {found}")]
    NotAMapping {
        /// Kind of YAML node found at the top level.
        found: &'static str,
    },

    /// A recognised key holds a sequence or mapping instead of a scalar.
    #[error("descriptor key `{key}` must be a scalar, found {found}")]
    NonScalarValue {
        /// The offending descriptor key.
        key: &'static str,
        /// Kind of YAML node found under the key.
        found: &'static str,
    },

    /// A field name did not match any descriptor key.
    #[error("unknown connector info field `{0}`")]
    UnknownField(String),
}
