//! Strongly typed loader configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, LoadResult};

/// File name looked up inside the base directory when none is configured.
pub const DEFAULT_FILE_NAME: &str = "info.yaml";

/// How load failures reach the caller.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Log failures and hand back the record as it was.
    #[default]
    BestEffort,
    /// Return failures, including descriptors that leave fields empty.
    Strict,
}

/// Where to find a descriptor and how to treat failures.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoaderConfig {
    base_dir: PathBuf,
    file_name: String,
    policy: LoadPolicy,
}

impl LoaderConfig {
    /// Starts building a configuration rooted at `base_dir`.
    #[must_use]
    pub fn builder(base_dir: impl Into<PathBuf>) -> LoaderConfigBuilder {
        LoaderConfigBuilder {
            base_dir: base_dir.into(),
            file_name: DEFAULT_FILE_NAME.to_owned(),
            policy: LoadPolicy::default(),
        }
    }

    /// Configuration for `base_dir/info.yaml` with the best-effort policy.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            file_name: DEFAULT_FILE_NAME.to_owned(),
            policy: LoadPolicy::default(),
        }
    }

    /// Directory holding the descriptor.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Descriptor file name inside [`Self::base_dir`].
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Failure policy.
    #[must_use]
    pub const fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Full path of the descriptor.
    #[must_use]
    pub fn descriptor_path(&self) -> PathBuf {
        self.base_dir.join(&self.file_name)
    }
}

/// Builder for [`LoaderConfig`].
#[derive(Debug)]
pub struct LoaderConfigBuilder {
    base_dir: PathBuf,
    file_name: String,
    policy: LoadPolicy,
}

impl LoaderConfigBuilder {
    /// Overrides the descriptor file name.
    #[must_use]
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Sets the failure policy.
    #[must_use]
    pub const fn policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidConfig`] when the file name is empty, is
    /// `.` or `..`, or contains a path separator.
    pub fn build(self) -> LoadResult<LoaderConfig> {
        let name = self.file_name.trim();
        if name.is_empty() {
            return Err(LoadError::InvalidConfig(
                "descriptor file name cannot be empty",
            ));
        }
        if name == "." || name == ".." {
            return Err(LoadError::InvalidConfig(
                "descriptor file name must name a file",
            ));
        }
        if name.contains(['/', '\\']) {
            return Err(LoadError::InvalidConfig(
                "descriptor file name must not contain path separators",
            ));
        }

        Ok(LoaderConfig {
            base_dir: self.base_dir,
            file_name: name.to_owned(),
            policy: self.policy,
        })
    }
}
