//! Repositories root resolution
//!
//! The root comes from, in order: `--repos-dir` (or `SPECS_REPOS_DIR`),
//! `repos_dir` in `~/.specs/config.toml`, then `~/.specs/repos`.

use std::path::PathBuf;

use specrepo_core::UserSettings;
use specrepo_fs::NormalizedPath;

use crate::error::{CliError, Result};

/// Resolve the repositories root, reading the user settings file only
/// when no explicit directory was given.
pub fn resolve_repos_root(explicit: Option<PathBuf>) -> Result<NormalizedPath> {
    if let Some(dir) = explicit {
        tracing::debug!(root = %dir.display(), "Using explicit repos root");
        return Ok(NormalizedPath::new(dir));
    }
    let settings = UserSettings::load_default()?;
    root_from_settings(&settings)
}

fn root_from_settings(settings: &UserSettings) -> Result<NormalizedPath> {
    let root = settings.repos_root().ok_or_else(|| {
        CliError::user("Unable to determine the home directory, pass --repos-dir")
    })?;
    tracing::debug!(root = %root.display(), "Using configured repos root");
    Ok(NormalizedPath::new(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let root = resolve_repos_root(Some(PathBuf::from("/srv/specs"))).unwrap();
        assert_eq!(root.as_str(), "/srv/specs");
    }

    #[test]
    fn test_settings_dir_is_used() {
        let settings = UserSettings {
            repos_dir: Some(PathBuf::from("/data/specs")),
        };
        assert_eq!(root_from_settings(&settings).unwrap().as_str(), "/data/specs");
    }
}
