//! Manager configuration and per-user settings

use std::path::PathBuf;

use serde::Deserialize;
use specrepo_fs::{ConfigStore, NormalizedPath};
use specrepo_meta::ToolVersion;

use crate::Result;

/// Directory under the home directory holding settings and repositories.
pub const SETTINGS_DIR: &str = ".specs";

/// Settings file name inside [`SETTINGS_DIR`].
pub const SETTINGS_FILENAME: &str = "config.toml";

/// Version of the running tool, taken from this crate's manifest.
pub fn current_tool_version() -> ToolVersion {
    let part = |s: &str| s.parse::<u64>().unwrap_or(0);
    ToolVersion::new(
        part(env!("CARGO_PKG_VERSION_MAJOR")),
        part(env!("CARGO_PKG_VERSION_MINOR")),
        part(env!("CARGO_PKG_VERSION_PATCH")),
    )
}

/// Immutable configuration handed to [`crate::RepoManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReposConfig {
    /// Directory under which every repository lives as `<root>/<name>`.
    pub repos_root: NormalizedPath,
    /// Version compared against each repository's `min`.
    pub tool_version: ToolVersion,
}

impl ReposConfig {
    pub fn new(repos_root: impl Into<NormalizedPath>) -> Self {
        Self {
            repos_root: repos_root.into(),
            tool_version: current_tool_version(),
        }
    }

    /// Same root, different tool version.
    pub fn with_tool_version(mut self, version: ToolVersion) -> Self {
        self.tool_version = version;
        self
    }

    /// Directory of the repository called `name`. The name is not validated.
    pub fn repo_dir(&self, name: &str) -> NormalizedPath {
        self.repos_root.join(name)
    }
}

/// Contents of `~/.specs/config.toml`.
///
/// ```toml
/// repos_dir = "/srv/specs"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub repos_dir: Option<PathBuf>,
}

impl UserSettings {
    /// Load settings from `path`; a missing file yields the defaults.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let settings = ConfigStore::new().load_if_exists(path)?;
        Ok(settings.unwrap_or_default())
    }

    /// Load the settings file from the home directory, if there is one.
    pub fn load_default() -> Result<Self> {
        match settings_dir() {
            Some(dir) => Self::load(&NormalizedPath::new(dir.join(SETTINGS_FILENAME))),
            None => Ok(Self::default()),
        }
    }

    /// Repositories root from these settings, or `~/.specs/repos`.
    pub fn repos_root(&self) -> Option<PathBuf> {
        self.repos_dir
            .clone()
            .or_else(|| settings_dir().map(|dir| dir.join("repos")))
    }
}

/// `~/.specs`, when a home directory can be determined.
pub fn settings_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(SETTINGS_DIR))
}
