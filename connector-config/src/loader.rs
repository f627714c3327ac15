//! Descriptor loader.

use connector_primitives::{ConnectorInfo, InfoField};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{LoadError, LoadResult};
use crate::schema::{LoadPolicy, LoaderConfig};
use crate::source::{DescriptorSource, FileSource};

/// Result of a load that did not fail.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// Every field carries a value.
    Complete,
    /// The descriptor was applied but some fields are still empty.
    Partial {
        /// Fields left empty.
        missing: Vec<InfoField>,
    },
    /// The descriptor could not be read or parsed and the failure was
    /// swallowed; the record is untouched.
    Unavailable {
        /// Fields that are empty on the untouched record.
        missing: Vec<InfoField>,
    },
}

impl LoadOutcome {
    fn for_record(info: &ConnectorInfo) -> Self {
        let missing = info.missing_fields();
        if missing.is_empty() {
            Self::Complete
        } else {
            Self::Partial { missing }
        }
    }

    /// Returns `true` for [`LoadOutcome::Complete`].
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Fields that were empty when loading finished.
    #[must_use]
    pub fn missing(&self) -> &[InfoField] {
        match self {
            Self::Complete => &[],
            Self::Partial { missing } | Self::Unavailable { missing } => missing,
        }
    }
}

/// Populates [`ConnectorInfo`] records from a descriptor source.
#[derive(Debug)]
pub struct InfoLoader {
    source: Box<dyn DescriptorSource>,
    policy: LoadPolicy,
}

impl InfoLoader {
    /// Creates a loader reading the file named by `config`.
    #[must_use]
    pub fn new(config: &LoaderConfig) -> Self {
        Self {
            source: Box::new(FileSource::new(config.descriptor_path())),
            policy: config.policy(),
        }
    }

    /// Creates a best-effort loader over an arbitrary source.
    #[must_use]
    pub fn from_source(source: impl DescriptorSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            policy: LoadPolicy::default(),
        }
    }

    /// Replaces the failure policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the configured failure policy.
    #[must_use]
    pub const fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Human-readable descriptor location.
    #[must_use]
    pub fn origin(&self) -> String {
        self.source.origin()
    }

    /// Reads the descriptor and merges it into `target`.
    ///
    /// Keys absent from the descriptor leave the matching field untouched. On
    /// error `target` is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Read`] when the source cannot be read and
    /// [`LoadError::Parse`] when its contents cannot be decoded.
    pub fn try_load(&self, target: &mut ConnectorInfo) -> LoadResult<LoadOutcome> {
        let bytes = self.source.read().map_err(|source| LoadError::Read {
            origin: self.source.origin(),
            source,
        })?;
        let applied = target
            .merge_yaml_slice(&bytes)
            .map_err(|source| LoadError::Parse {
                origin: self.source.origin(),
                source,
            })?;

        let outcome = LoadOutcome::for_record(target);
        debug!(
            origin = %self.source.origin(),
            applied = applied.len(),
            missing = outcome.missing().len(),
            "connector descriptor loaded"
        );
        Ok(outcome)
    }

    /// Loads under the configured policy.
    ///
    /// With [`LoadPolicy::BestEffort`] failures are logged and reported as
    /// [`LoadOutcome::Unavailable`]. With [`LoadPolicy::Strict`] failures are
    /// returned and a partial descriptor becomes [`LoadError::Incomplete`].
    ///
    /// # Errors
    ///
    /// Only in strict mode: see [`Self::try_load`], plus
    /// [`LoadError::Incomplete`].
    pub fn load_with_policy(&self, target: &mut ConnectorInfo) -> LoadResult<LoadOutcome> {
        match (self.policy, self.try_load(target)) {
            (LoadPolicy::Strict, Ok(LoadOutcome::Partial { missing })) => {
                Err(LoadError::Incomplete {
                    origin: self.source.origin(),
                    missing,
                })
            }
            (LoadPolicy::BestEffort, Err(err)) => {
                self.report_unavailable(&err);
                Ok(LoadOutcome::Unavailable {
                    missing: target.missing_fields(),
                })
            }
            (_, result) => result,
        }
    }

    /// Best-effort load that always hands `target` back.
    ///
    /// Failures are logged and never surface to the caller, whatever policy is
    /// configured; inspect the returned record to detect missing fields.
    pub fn load<'a>(&self, target: &'a mut ConnectorInfo) -> &'a mut ConnectorInfo {
        if let Err(err) = self.try_load(target) {
            self.report_unavailable(&err);
        }
        target
    }

    /// Loads into a fresh zero-valued record under the configured policy.
    ///
    /// # Errors
    ///
    /// Only in strict mode; see [`Self::load_with_policy`].
    pub fn read_info(&self) -> LoadResult<ConnectorInfo> {
        let mut info = ConnectorInfo::default();
        self.load_with_policy(&mut info)?;
        Ok(info)
    }

    fn report_unavailable(&self, err: &LoadError) {
        warn!(
            origin = %self.source.origin(),
            error = %err,
            "connector descriptor unavailable; keeping record as-is"
        );
    }
}
