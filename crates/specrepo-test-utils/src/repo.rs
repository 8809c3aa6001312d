//! [`ReposRoot`]: a temporary repositories root plus a place for upstreams.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::{git, specs};

/// A temporary directory laid out as:
///
/// ```text
/// <tmp>/repos/       repositories root handed to the manager
/// <tmp>/upstreams/   git repositories that play the remote side
/// ```
pub struct ReposRoot {
    temp_dir: TempDir,
}

impl Default for ReposRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl ReposRoot {
    /// Create the temporary layout. The repos root itself is created too.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("repos")).unwrap();
        fs::create_dir_all(temp_dir.path().join("upstreams")).unwrap();
        Self { temp_dir }
    }

    /// The repositories root.
    pub fn repos_dir(&self) -> PathBuf {
        self.temp_dir.path().join("repos")
    }

    /// Directory of the repository called `name` under the root.
    pub fn repo_dir(&self, name: &str) -> PathBuf {
        self.repos_dir().join(name)
    }

    /// Create an upstream git repository holding one valid spec.
    ///
    /// Returns its path, usable as a clone URL.
    pub fn upstream(&self, name: &str) -> PathBuf {
        let path = self.temp_dir.path().join("upstreams").join(name);
        fs::create_dir_all(&path).unwrap();
        specs::write_spec(&path, "Foo", "1.0.0", &specs::valid_spec_yaml("Foo", "1.0.0"));
        git::init_with_commit(&path);
        path
    }

    /// Write the compatibility manifest of repository `name`.
    pub fn write_versions(&self, name: &str, file_name: &str, content: &str) {
        fs::write(self.repo_dir(name).join(file_name), content).unwrap();
    }

    /// Assert that the file at `path` (relative to the repo `name`) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, name: &str, path: &str, content: &str) {
        let full_path = self.repo_dir(name).join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }

    /// Assert that the file at `path` (relative to the repo `name`) does **not** contain `content`.
    pub fn assert_file_lacks(&self, name: &str, path: &str, content: &str) {
        let full_path = self.repo_dir(name).join(path);
        let file_content = fs::read_to_string(&full_path).unwrap_or_default();
        assert!(
            !file_content.contains(content),
            "File {} unexpectedly contains: {}",
            full_path.display(),
            content
        );
    }
}
