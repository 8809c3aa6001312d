//! Per-repository compatibility manifest.
//!
//! A spec repository may carry a small YAML file at its root declaring
//! which tool versions can use its contents:
//!
//! ```yaml
//! min: "0.3.0"   # oldest compatible tool version
//! last: "0.5.1"  # newest tool version known to the repository
//! ```
//!
//! Only `min` takes part in the compatibility decision. `last` is kept for
//! completeness and never acted upon.

use serde::{Deserialize, Serialize};
use specrepo_fs::{NormalizedPath, io};

use crate::error::{Error, Result};
use crate::version::{ToolVersion, lenient_version};

/// File name of the compatibility manifest, relative to the repository root.
pub const VERSIONS_FILENAME: &str = "specs-version.yml";

/// Decoded compatibility manifest. Both keys are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionsManifest {
    /// Minimum tool version able to use the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<ToolVersion>,

    /// Latest tool version known when the repository was published.
    /// Informational only, so a value that is not a version reads as `None`.
    #[serde(
        default,
        deserialize_with = "lenient_version",
        skip_serializing_if = "Option::is_none"
    )]
    pub last: Option<ToolVersion>,
}

impl VersionsManifest {
    /// Decode manifest text. Empty documents decode to an empty manifest.
    pub fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let manifest: Option<Self> = serde_yaml::from_str(content)?;
        Ok(manifest.unwrap_or_default())
    }

    /// Load the manifest of the repository at `repo_dir`.
    ///
    /// Returns `Ok(None)` when the repository has no manifest.
    pub fn load(repo_dir: &NormalizedPath) -> Result<Option<Self>> {
        let path = repo_dir.join(VERSIONS_FILENAME);
        let Some(content) = io::read_text_if_exists(&path)? else {
            return Ok(None);
        };

        Self::parse(&content)
            .map(Some)
            .map_err(|e| Error::ManifestParse {
                path: path.to_native(),
                message: e.to_string(),
            })
    }

    /// Whether a tool at `version` may use the repository.
    ///
    /// Build metadata does not take part in the comparison.
    pub fn supports(&self, version: &ToolVersion) -> bool {
        match &self.min {
            Some(min) => min.as_semver().cmp_precedence(version.as_semver()).is_le(),
            None => true,
        }
    }
}
