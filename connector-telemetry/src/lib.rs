//! Observability utilities for connector tooling.

#![warn(missing_docs, clippy::pedantic)]

pub mod tracing_support {
    //! Structured tracing helpers.

    use thiserror::Error;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::filter::ParseError;

    /// Filter applied when `RUST_LOG` is unset.
    pub const DEFAULT_FILTER: &str = "info";

    /// Errors raised while installing the global subscriber.
    #[derive(Debug, Error)]
    pub enum TelemetryError {
        /// The filter directive could not be parsed.
        #[error("invalid log filter `{directive}`: {source}")]
        InvalidFilter {
            /// Directive as supplied.
            directive: String,
            /// Parser error.
            source: ParseError,
        },
        /// A global subscriber is already installed.
        #[error("global tracing subscriber already set")]
        AlreadyInitialised,
    }

    /// Builds the filter, preferring `RUST_LOG` over `fallback`.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::InvalidFilter`] when `fallback` is used and
    /// does not parse.
    pub fn filter(fallback: &str) -> Result<EnvFilter, TelemetryError> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(fallback).map_err(|source| TelemetryError::InvalidFilter {
            directive: fallback.to_owned(),
            source,
        })
    }

    /// Installs a compact `fmt` subscriber writing to stderr.
    ///
    /// # Errors
    ///
    /// Returns an error when the filter is invalid or a subscriber is already
    /// installed.
    pub fn init(fallback: &str) -> Result<(), TelemetryError> {
        tracing_subscriber::fmt()
            .with_env_filter(filter(fallback)?)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|_| TelemetryError::AlreadyInitialised)
    }

}
