//! libgit2-backed implementation of [`VersionControl`]

use git2::Repository;
use specrepo_fs::NormalizedPath;

use crate::{
    DEFAULT_REMOTE, Error, Result, helpers,
    vcs::VersionControl,
};

/// Version control through `git2`.
///
/// Works on plain (non-bare) working copies with a single remote.
#[derive(Debug, Clone)]
pub struct Git2Client {
    remote: String,
}

impl Git2Client {
    /// Client that clones and pulls through the `origin` remote.
    pub fn new() -> Self {
        Self {
            remote: DEFAULT_REMOTE.to_string(),
        }
    }

    fn open(&self, path: &NormalizedPath) -> Result<Repository> {
        Ok(Repository::open(path.to_native())?)
    }
}

impl Default for Git2Client {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for Git2Client {
    fn clone_repo(&self, url: &str, dest: &NormalizedPath) -> Result<()> {
        tracing::debug!(url = %url, dest = %dest, "Cloning");
        let mut builder = git2::build::RepoBuilder::new();
        builder.remote_create(|repo, _name, url| repo.remote(&self.remote, url));
        builder
            .clone(url, &dest.to_native())
            .map_err(|e| Error::CloneFailed {
                url: url.to_string(),
                message: e.message().to_string(),
            })?;
        Ok(())
    }

    fn checkout(&self, repo: &NormalizedPath, branch: &str) -> Result<()> {
        let repository = self.open(repo)?;
        helpers::checkout_branch(&repository, branch, &self.remote)
    }

    fn pull(&self, repo: &NormalizedPath) -> Result<()> {
        let repository = self.open(repo)?;
        let branch = helpers::get_current_branch(&repository)?.ok_or_else(|| {
            Error::DetachedHead {
                path: repo.to_native(),
            }
        })?;
        helpers::fast_forward_pull(&repository, &self.remote, &branch)
    }

    fn current_branch(&self, repo: &NormalizedPath) -> Result<Option<String>> {
        let repository = self.open(repo)?;
        helpers::get_current_branch(&repository)
    }

    fn remote_url(&self, repo: &NormalizedPath, remote: &str) -> Result<Option<String>> {
        let repository = self.open(repo)?;
        match repository.find_remote(remote) {
            Ok(found) => Ok(found.url().map(str::to_string)),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
