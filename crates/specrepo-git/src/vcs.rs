//! The version-control capability the repository manager depends on

use crate::Result;
use specrepo_fs::NormalizedPath;

/// Remote name used for clones and pulls.
pub const DEFAULT_REMOTE: &str = "origin";

/// Version-control operations needed to maintain spec repositories.
///
/// Implementations must not assume anything about the layout of the
/// repository contents; they only manage the working copy.
pub trait VersionControl {
    /// Clone `url` into `dest`.
    ///
    /// `dest` either does not exist or is an empty directory.
    fn clone_repo(&self, url: &str, dest: &NormalizedPath) -> Result<()>;

    /// Check out `branch` in the working copy at `repo`.
    ///
    /// When no local branch of that name exists, one is created from the
    /// remote-tracking branch and set to track it.
    fn checkout(&self, repo: &NormalizedPath, branch: &str) -> Result<()>;

    /// Bring the current branch up to date with its remote counterpart.
    fn pull(&self, repo: &NormalizedPath) -> Result<()>;

    /// Name of the checked out branch, or `None` when HEAD is detached.
    fn current_branch(&self, repo: &NormalizedPath) -> Result<Option<String>>;

    /// URL configured for `remote`, or `None` when the remote does not exist.
    fn remote_url(&self, repo: &NormalizedPath, remote: &str) -> Result<Option<String>>;
}
