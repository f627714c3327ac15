//! Loading of connector identity descriptors.
//!
//! A descriptor is a flat `info.yaml` mapping read from an injected base
//! directory or embedded at compile time with [`include_descriptor!`].

#![warn(missing_docs, clippy::pedantic)]

mod error;
pub mod loader;
pub mod schema;
pub mod source;

pub use error::{LoadError, LoadResult};
pub use loader::{InfoLoader, LoadOutcome};
pub use schema::{DEFAULT_FILE_NAME, LoadPolicy, LoaderConfig, LoaderConfigBuilder};
pub use source::{DescriptorSource, EmbeddedSource, FileSource};

/// Embeds a descriptor from the calling crate at compile time.
///
/// The path is resolved against the calling crate's manifest directory and
/// defaults to `info.yaml`.
///
/// ```ignore
/// let loader = connector_config::InfoLoader::from_source(
///     connector_config::include_descriptor!("info.yaml"),
/// );
/// ```
#[macro_export]
macro_rules! include_descriptor {
    () => {
        $crate::include_descriptor!("info.yaml")
    };
    ($file:literal) => {
        $crate::EmbeddedSource::new(
            $file,
            include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/", $file)),
        )
    };
}
