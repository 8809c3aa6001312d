//! Package spec schema - loaded from `<Name>/<version>/<Name>.spec.{yml,yaml,json}`
//!
//! # Example YAML
//!
//! ```yaml
//! name: Foo
//! version: 1.0.0
//! summary: Foo does useful things.
//! homepage: https://example.com/Foo
//! license:
//!   type: MIT
//!   file: LICENSE
//! source:
//!   git: https://example.com/Foo.git
//!   tag: 1.0.0
//! ```
//!
//! Every field is optional at the type level so that a malformed spec
//! still decodes and the linter can report each missing field by name.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::version::VersionText;

/// File name suffixes that mark a spec file.
pub const SPEC_SUFFIXES: &[&str] = &[".spec.yml", ".spec.yaml", ".spec.json"];

/// Whether `file_name` names a spec file.
pub fn is_spec_file(file_name: &str) -> bool {
    SPEC_SUFFIXES
        .iter()
        .any(|suffix| file_name.len() > suffix.len() && file_name.ends_with(suffix))
}

/// Decoded package spec.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SpecMetadata {
    #[serde(default)]
    pub name: Option<String>,

    /// Kept as text so an invalid version can be reported verbatim.
    #[serde(default, deserialize_with = "version_text")]
    pub version: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub homepage: Option<String>,

    #[serde(default)]
    pub license: Option<License>,

    /// Where the package sources come from, e.g. `git` + `tag`.
    #[serde(default)]
    pub source: Option<BTreeMap<String, String>>,

    #[serde(default)]
    pub authors: Option<serde_yaml::Value>,
}

/// License declaration: either the bare type or a table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum License {
    Type(String),
    Detailed {
        #[serde(rename = "type", default)]
        kind: Option<String>,
        #[serde(default)]
        file: Option<String>,
        #[serde(default)]
        text: Option<String>,
    },
}

impl License {
    /// The declared license type, if it is non-blank.
    pub fn kind(&self) -> Option<&str> {
        let kind = match self {
            Self::Type(kind) => Some(kind.as_str()),
            Self::Detailed { kind, .. } => kind.as_deref(),
        };
        kind.map(str::trim).filter(|k| !k.is_empty())
    }
}

fn version_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    deserializer.deserialize_any(VersionText)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_spec_file() {
        assert!(is_spec_file("Foo.spec.yml"));
        assert!(is_spec_file("Foo.spec.json"));
        assert!(!is_spec_file(".spec.yml"));
        assert!(!is_spec_file("README.md"));
        assert!(!is_spec_file("Foo.yml"));
    }

    #[test]
    fn test_license_as_string() {
        let spec: SpecMetadata = serde_yaml::from_str("license: MIT").unwrap();
        assert_eq!(spec.license.unwrap().kind(), Some("MIT"));
    }

    #[test]
    fn test_license_as_table_without_type() {
        let spec: SpecMetadata = serde_yaml::from_str("license:\n  file: LICENSE\n").unwrap();
        assert_eq!(spec.license.unwrap().kind(), None);
    }

    #[test]
    fn test_empty_version_decodes_as_missing() {
        let spec: SpecMetadata = serde_yaml::from_str("name: Foo\nversion:\n").unwrap();
        assert_eq!(spec.version, None);
        assert_eq!(spec.name.as_deref(), Some("Foo"));
    }

    #[test]
    fn test_numeric_version_is_kept_as_text() {
        let spec: SpecMetadata = serde_yaml::from_str("version: 1.5").unwrap();
        assert_eq!(spec.version.as_deref(), Some("1.5"));
    }
}
