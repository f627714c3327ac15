//! Descriptor byte sources.

use std::borrow::Cow;
use std::fmt::Debug;
use std::io;
use std::path::{Path, PathBuf};

/// Supplies the raw bytes of a descriptor.
pub trait DescriptorSource: Debug + Send + Sync {
    /// Human-readable location used in diagnostics.
    fn origin(&self) -> String;

    /// Reads the full descriptor contents.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the descriptor cannot be read.
    fn read(&self) -> io::Result<Cow<'_, [u8]>>;
}

/// Descriptor stored on the local filesystem.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the descriptor path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DescriptorSource for FileSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> io::Result<Cow<'_, [u8]>> {
        std::fs::read(&self.path).map(Cow::Owned)
    }
}

/// Descriptor compiled into the binary, usually via
/// [`include_descriptor!`](crate::include_descriptor).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmbeddedSource {
    name: &'static str,
    bytes: &'static [u8],
}

impl EmbeddedSource {
    /// Wraps embedded descriptor bytes under a display name.
    #[must_use]
    pub const fn new(name: &'static str, bytes: &'static [u8]) -> Self {
        Self { name, bytes }
    }
}

impl DescriptorSource for EmbeddedSource {
    fn origin(&self) -> String {
        format!("embedded:{}", self.name)
    }

    fn read(&self) -> io::Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_not_found() {
        let source = FileSource::new("/definitely/not/here/info.yaml");
        let err = source.read().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(source.path(), Path::new("/definitely/not/here/info.yaml"));
        assert_eq!(source.origin(), "/definitely/not/here/info.yaml");
    }

    #[test]
    fn embedded_source_borrows_bytes() {
        let source = EmbeddedSource::new("info.yaml", b"slug_name: foo\n");
        assert!(matches!(source.read().unwrap(), Cow::Borrowed(_)));
        assert_eq!(source.origin(), "embedded:info.yaml");
    }
}
