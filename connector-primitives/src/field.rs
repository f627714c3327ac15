//! Descriptor key identifiers.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// One of the five keys carried by an `info.yaml` descriptor.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoField {
    /// `slug_name`: short machine-usable identifier.
    SlugName,
    /// `type`: category label.
    Type,
    /// `version`: connector version string.
    Version,
    /// `author`: attribution string.
    Author,
    /// `link`: reference URL.
    Link,
}

impl InfoField {
    /// Every field, in descriptor order.
    pub const ALL: [Self; 5] = [
        Self::SlugName,
        Self::Type,
        Self::Version,
        Self::Author,
        Self::Link,
    ];

    /// Returns the exact (case-sensitive) YAML key for this field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SlugName => "slug_name",
            Self::Type => "type",
            Self::Version => "version",
            Self::Author => "author",
            Self::Link => "link",
        }
    }
}

impl Display for InfoField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for InfoField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| Error::UnknownField(s.to_owned()))
    }
}
