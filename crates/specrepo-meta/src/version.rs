//! Lenient version parsing.
//!
//! Versions written by humans in YAML files are often short (`1.0`, `2`)
//! or unquoted, so YAML hands them over as numbers. [`ToolVersion`]
//! accepts all of those and normalizes them to a full semver version:
//!
//! ```
//! use specrepo_meta::ToolVersion;
//!
//! assert_eq!(ToolVersion::parse("1.2").unwrap().to_string(), "1.2.0");
//! assert_eq!(ToolVersion::parse("3").unwrap().to_string(), "3.0.0");
//! assert!(ToolVersion::parse("0.0.1").unwrap() < ToolVersion::parse("0.1").unwrap());
//! ```
//!
//! Unquoted floats lose trailing zeros (`1.10` is read as `1.1`); quote
//! such versions in YAML.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};

/// A version with ordering, parsed leniently.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToolVersion(semver::Version);

impl ToolVersion {
    /// Parse `major`, `major.minor` or a full semver string.
    pub fn parse(version: &str) -> Result<Self> {
        normalize_version(version).map(Self)
    }

    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(semver::Version::new(major, minor, patch))
    }

    /// The underlying semver version.
    pub fn as_semver(&self) -> &semver::Version {
        &self.0
    }
}

impl FromStr for ToolVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for ToolVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ToolVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = deserializer
            .deserialize_any(VersionText)?
            .ok_or_else(|| de::Error::custom("expected a version, found nothing"))?;
        ToolVersion::parse(&raw).map_err(de::Error::custom)
    }
}

/// Accepts a version written as a string or as a YAML number. An empty
/// value (`version:`) yields `None`.
pub(crate) struct VersionText;

impl<'de> Visitor<'de> for VersionText {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a version string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

/// Decode a version that may be absent, empty or not a version at all.
///
/// Anything that does not parse becomes `None`; it never fails.
pub(crate) fn lenient_version<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<ToolVersion>, D::Error> {
    let value = serde_yaml::Value::deserialize(deserializer)?;
    let text = match value {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Number(n) => n.to_string(),
        _ => return Ok(None),
    };
    Ok(ToolVersion::parse(&text).ok())
}

/// Normalize a version string to semver by padding missing components.
///
/// - `"3.12"` -> `3.12.0`
/// - `"3"` -> `3.0.0`
/// - `"3.12.1-beta.1"` -> unchanged
fn normalize_version(s: &str) -> Result<semver::Version> {
    let s = s.trim();

    if let Ok(v) = semver::Version::parse(s) {
        return Ok(v);
    }

    let invalid = |message: String| Error::InvalidVersion {
        version: s.to_string(),
        message,
    };

    let core_len = s.find(['-', '+']).unwrap_or(s.len());
    let components = s[..core_len].split('.').count();
    let padded = match components {
        1 => format!("{}.0.0{}", &s[..core_len], &s[core_len..]),
        2 => format!("{}.0{}", &s[..core_len], &s[core_len..]),
        _ => return Err(invalid("expected major[.minor[.patch]]".to_string())),
    };

    semver::Version::parse(&padded).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_three_part() {
        let v = normalize_version("3.12.1").unwrap();
        assert_eq!(v, semver::Version::new(3, 12, 1));
    }

    #[test]
    fn test_normalize_two_part() {
        let v = normalize_version("3.12").unwrap();
        assert_eq!(v, semver::Version::new(3, 12, 0));
    }

    #[test]
    fn test_normalize_one_part() {
        let v = normalize_version("999").unwrap();
        assert_eq!(v, semver::Version::new(999, 0, 0));
    }

    #[test]
    fn test_normalize_whitespace() {
        let v = normalize_version("  0.0.1  ").unwrap();
        assert_eq!(v, semver::Version::new(0, 0, 1));
    }

    #[test]
    fn test_normalize_short_prerelease() {
        let v = normalize_version("1.0-beta").unwrap();
        assert_eq!(v.to_string(), "1.0.0-beta");
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(normalize_version("not-a-version").is_err());
        assert!(normalize_version("").is_err());
        assert!(normalize_version("1.2.3.4").is_err());
    }

    #[test]
    fn test_prerelease_orders_before_release() {
        let pre = ToolVersion::parse("1.0.0-rc.1").unwrap();
        let release = ToolVersion::parse("1.0.0").unwrap();
        assert!(pre < release);
    }

    #[test]
    fn test_deserialize_from_yaml_number() {
        let v: ToolVersion = serde_yaml::from_str("1.5").unwrap();
        assert_eq!(v.to_string(), "1.5.0");
        let v: ToolVersion = serde_yaml::from_str("2").unwrap();
        assert_eq!(v.to_string(), "2.0.0");
    }

    #[test]
    fn test_deserialize_from_yaml_string() {
        let v: ToolVersion = serde_yaml::from_str("\"0.0.1\"").unwrap();
        assert_eq!(v, ToolVersion::parse("0.0.1").unwrap());
    }
}
