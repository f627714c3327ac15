//! Connector identity descriptors.
//!
//! Bundles the record types with the `info.yaml` loader behind feature flags
//! so downstream connectors can depend on just the pieces they use.

#![warn(missing_docs, clippy::pedantic)]

/// Re-export shared primitives for convenience.
pub use connector_primitives as primitives;
pub use connector_primitives::{ConnectorInfo, InfoField};

/// Descriptor loading (enabled by `config` feature).
#[cfg(feature = "config")]
pub use connector_config as config;

#[cfg(feature = "config")]
pub use connector_config::{InfoLoader, LoadOutcome, LoadPolicy, LoaderConfig, include_descriptor};

/// Logging bootstrap (enabled by `telemetry` feature).
#[cfg(feature = "telemetry")]
pub use connector_telemetry as telemetry;
