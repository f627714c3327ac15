//! Connector identity record and its descriptor decoding.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::{Mapping, Value};

use crate::{Error, InfoField, Result};

/// Identity metadata for a connector, as described by its `info.yaml`.
///
/// Every field defaults to the empty string; a field stays empty until a
/// descriptor supplies a value for it.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorInfo {
    /// Short machine-usable identifier.
    pub slug_name: String,
    /// Category label, serialized as `type`.
    pub r#type: String,
    /// Connector version string.
    pub version: String,
    /// Attribution string.
    pub author: String,
    /// Reference URL.
    pub link: String,
}

impl ConnectorInfo {
    /// Parses a standalone descriptor into a fresh record.
    ///
    /// # Errors
    ///
    /// Returns an error when the bytes are not YAML or the document is not a
    /// flat mapping of scalars.
    pub fn from_yaml_slice(bytes: &[u8]) -> Result<Self> {
        let mut info = Self::default();
        info.merge_yaml_slice(bytes)?;
        Ok(info)
    }

    /// Merges a descriptor into this record and returns the fields it set.
    ///
    /// Only keys present in the document are written; absent keys keep their
    /// current value and unknown keys are ignored. A `null` value clears the
    /// field. Unquoted scalars keep the text as written, so `version: 1.10`
    /// stays `"1.10"`.
    ///
    /// Decoding happens before any field is touched, so on error the record is
    /// left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Yaml`] for unparsable input, [`Error::NotAMapping`] when
    /// the top level is not a mapping, and [`Error::NonScalarValue`] when a known
    /// key holds a sequence or mapping.
    pub fn merge_yaml_slice(&mut self, bytes: &[u8]) -> Result<Vec<InfoField>> {
        if is_blank_document(bytes) {
            return Ok(Vec::new());
        }

        let document: Value = serde_yaml::from_slice(bytes)?;
        match &document {
            Value::Null => return Ok(Vec::new()),
            Value::Mapping(mapping) => check_scalars(mapping)?,
            other => {
                return Err(Error::NotAMapping {
                    found: node_kind(other),
                });
            }
        }

        // Decoded a second time into strings so scalars keep their source text.
        let staged: StagedInfo = serde_yaml::from_slice(bytes)?;
        let mut applied = Vec::with_capacity(InfoField::ALL.len());
        for (field, value) in staged.into_entries() {
            if let Some(value) = value {
                self.set(field, value.unwrap_or_default());
                applied.push(field);
            }
        }
        Ok(applied)
    }

    /// Returns the value of `field`.
    #[must_use]
    pub fn get(&self, field: InfoField) -> &str {
        match field {
            InfoField::SlugName => &self.slug_name,
            InfoField::Type => &self.r#type,
            InfoField::Version => &self.version,
            InfoField::Author => &self.author,
            InfoField::Link => &self.link,
        }
    }

    /// Overwrites `field` with `value`.
    pub fn set(&mut self, field: InfoField, value: impl Into<String>) {
        let slot = match field {
            InfoField::SlugName => &mut self.slug_name,
            InfoField::Type => &mut self.r#type,
            InfoField::Version => &mut self.version,
            InfoField::Author => &mut self.author,
            InfoField::Link => &mut self.link,
        };
        *slot = value.into();
    }

    /// Returns the fields that are still empty, in descriptor order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<InfoField> {
        InfoField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Returns `true` when every field carries a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        InfoField::ALL
            .into_iter()
            .all(|field| !self.get(field).is_empty())
    }

    /// Returns `true` when no field carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        InfoField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }
}

impl Display for ConnectorInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = if self.slug_name.is_empty() {
            "<unnamed>"
        } else {
            self.slug_name.as_str()
        };
        f.write_str(name)?;
        if !self.version.is_empty() {
            write!(f, "@{}", self.version)?;
        }
        if !self.r#type.is_empty() {
            write!(f, " ({})", self.r#type)?;
        }
        Ok(())
    }
}

fn is_blank_document(bytes: &[u8]) -> bool {
    std::str::from_utf8(bytes).is_ok_and(|text| {
        text.lines()
            .map(str::trim)
            .all(|line| line.is_empty() || line == "---" || line.starts_with('#'))
    })
}

/// Descriptor keys as written: `None` when absent, `Some(None)` for `null`.
#[derive(Deserialize)]
struct StagedInfo {
    #[serde(default, deserialize_with = "present")]
    slug_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    r#type: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    version: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    author: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    link: Option<Option<String>>,
}

impl StagedInfo {
    fn into_entries(self) -> [(InfoField, Option<Option<String>>); 5] {
        [
            (InfoField::SlugName, self.slug_name),
            (InfoField::Type, self.r#type),
            (InfoField::Version, self.version),
            (InfoField::Author, self.author),
            (InfoField::Link, self.link),
        ]
    }
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

fn check_scalars(mapping: &Mapping) -> Result<()> {
    for field in InfoField::ALL {
        if let Some(value) = mapping.get(field.key()) {
            check_scalar(field, value)?;
        }
    }
    Ok(())
}

fn check_scalar(field: InfoField, value: &Value) -> Result<()> {
    match value {
        Value::Tagged(tagged) => check_scalar(field, &tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => Err(Error::NonScalarValue {
            key: field.key(),
            found: node_kind(value),
        }),
        _ => Ok(()),
    }
}

fn node_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "\
slug_name: foo
type: source
version: 0.1.0
author: A
link: http://x
";

    #[test]
    fn parses_all_fields() {
        let info = ConnectorInfo::from_yaml_slice(FULL.as_bytes()).unwrap();
        assert_eq!(info.slug_name, "foo");
        assert_eq!(info.r#type, "source");
        assert_eq!(info.version, "0.1.0");
        assert_eq!(info.author, "A");
        assert_eq!(info.link, "http://x");
        assert!(info.is_complete());
    }

    #[test]
    fn absent_keys_keep_existing_values() {
        let mut info = ConnectorInfo {
            author: "kept".into(),
            ..ConnectorInfo::default()
        };
        let applied = info.merge_yaml_slice(b"slug_name: foo\n").unwrap();
        assert_eq!(applied, [InfoField::SlugName]);
        assert_eq!(info.slug_name, "foo");
        assert_eq!(info.author, "kept");
    }

    #[test]
    fn null_clears_field() {
        let mut info = ConnectorInfo {
            link: "http://old".into(),
            ..ConnectorInfo::default()
        };
        info.merge_yaml_slice(b"link: ~\n").unwrap();
        assert!(info.link.is_empty());
    }

    #[test]
    fn scalars_keep_source_text() {
        for text in ["1.10", "0x1F", "1e3", "010", "2"] {
            let info = ConnectorInfo::from_yaml_slice(format!("version: {text}\n").as_bytes())
                .unwrap();
            assert_eq!(info.version, text);
        }
        let info = ConnectorInfo::from_yaml_slice(b"author: True\nlink: \"\"\n").unwrap();
        assert_eq!(info.author, "True");
        assert!(info.link.is_empty());
    }

    #[test]
    fn unknown_and_miscased_keys_are_ignored() {
        let info =
            ConnectorInfo::from_yaml_slice(b"Slug_Name: nope\nextra: [1, 2]\ntype: sink\n")
                .unwrap();
        assert!(info.slug_name.is_empty());
        assert_eq!(info.r#type, "sink");
    }

    #[test]
    fn empty_document_sets_nothing() {
        let info = ConnectorInfo::from_yaml_slice(b"  \n").unwrap();
        assert!(info.is_empty());
        let info = ConnectorInfo::from_yaml_slice(b"# just a comment\n").unwrap();
        assert!(info.is_empty());
    }

    #[test]
    fn rejects_non_mapping_document() {
        let err = ConnectorInfo::from_yaml_slice(b"- a\n- b\n").unwrap_err();
        assert!(matches!(err, Error::NotAMapping { found: "sequence" }));
    }

    #[test]
    fn rejects_nested_value_without_touching_record() {
        let mut info = ConnectorInfo {
            slug_name: "before".into(),
            ..ConnectorInfo::default()
        };
        let err = info
            .merge_yaml_slice(b"slug_name: after\nauthor:\n  name: A\n")
            .unwrap_err();
        assert!(matches!(err, Error::NonScalarValue { key: "author", .. }));
        assert_eq!(info.slug_name, "before");
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = ConnectorInfo::from_yaml_slice(&[0xff, 0xfe, 0x00, 0x9f]).unwrap_err();
        assert!(matches!(err, Error::Yaml { .. }));
    }

    #[test]
    fn display_summarises_identity() {
        let info = ConnectorInfo::from_yaml_slice(FULL.as_bytes()).unwrap();
        assert_eq!(info.to_string(), "foo@0.1.0 (source)");
        assert_eq!(ConnectorInfo::default().to_string(), "<unnamed>");
    }

    #[test]
    fn missing_fields_follow_descriptor_order() {
        let info = ConnectorInfo::from_yaml_slice(b"version: 1.0.0\n").unwrap();
        assert_eq!(
            info.missing_fields(),
            [
                InfoField::SlugName,
                InfoField::Type,
                InfoField::Author,
                InfoField::Link
            ]
        );
    }
}
