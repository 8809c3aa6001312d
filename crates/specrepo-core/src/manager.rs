//! Adding, updating, linting and checking spec repositories.

use specrepo_fs::{NormalizedPath, io, validate_path_identifier};
use specrepo_git::{DEFAULT_REMOTE, Git2Client, VersionControl};
use specrepo_meta::{LintReport, Linter, SpecLinter, VersionsManifest};

use crate::config::ReposConfig;
use crate::{Error, Result};

/// A spec repository under the repositories root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    pub path: NormalizedPath,
}

/// Working copy state shown by `specs repo list`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoStatus {
    /// `None` when HEAD is detached.
    pub branch: Option<String>,
    pub remote_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LintOptions {
    /// Let warnings through; only error-level issues fail the lint.
    pub only_errors: bool,
}

/// Manages the repositories living under [`ReposConfig::repos_root`].
///
/// Version control and linting go through the [`VersionControl`] and
/// [`Linter`] collaborators, which tests replace with fakes.
pub struct RepoManager<V = Git2Client, L = SpecLinter> {
    config: ReposConfig,
    vcs: V,
    linter: L,
}

impl RepoManager {
    /// Manager backed by `git2` and the built-in spec linter.
    pub fn new(config: ReposConfig) -> Self {
        Self::with_collaborators(config, Git2Client::new(), SpecLinter::new())
    }
}

impl<V: VersionControl, L: Linter> RepoManager<V, L> {
    pub fn with_collaborators(config: ReposConfig, vcs: V, linter: L) -> Self {
        Self {
            config,
            vcs,
            linter,
        }
    }

    pub fn config(&self) -> &ReposConfig {
        &self.config
    }

    pub fn vcs(&self) -> &V {
        &self.vcs
    }

    /// Clone `url` into `<root>/<name>`, optionally checking out `branch`.
    ///
    /// On a failed clone or checkout the directory created for the clone is
    /// removed again, so the same command can simply be retried.
    pub fn add(&self, name: &str, url: &str, branch: Option<&str>) -> Result<Repository> {
        let name = name.trim();
        let url = url.trim();
        if name.is_empty() || url.is_empty() {
            return Err(Error::informative(
                "`repo add` needs a `NAME` and a `URL`.",
            ));
        }

        let path = self.repo_dir(name)?;
        if !io::is_empty_dir(&path)? {
            return Err(Error::informative(format!(
                "A spec repo named `{name}` already exists at `{path}`."
            )));
        }

        let created = !path.exists();
        io::create_dir_all(&path)?;

        tracing::info!(name = %name, url = %url, "Cloning spec repo");
        let branch = branch.map(str::trim).filter(|b| !b.is_empty());
        if let Err(e) = self.clone_and_checkout(url, &path, branch) {
            if created && let Err(cleanup) = io::remove_dir_all(&path) {
                tracing::warn!(path = %path, error = %cleanup, "Could not remove failed clone");
            }
            return Err(e);
        }

        Ok(Repository {
            name: name.to_string(),
            path,
        })
    }

    /// Pull the named repository, or every repository when `name` is `None`.
    ///
    /// Every target is checked for compatibility before anything is pulled.
    /// Pulls then run in name order and the first failure stops the batch.
    pub fn update(&self, name: Option<&str>) -> Result<Vec<Repository>> {
        let targets = match name {
            Some(name) => vec![self.existing(name)?],
            None => self.list()?,
        };

        for repo in &targets {
            self.ensure_compatible(repo)?;
        }

        for repo in &targets {
            tracing::info!("Updating spec repo `{}`", repo.name);
            self.vcs.pull(&repo.path)?;
        }

        Ok(targets)
    }

    /// Pull every repository under the root.
    pub fn update_all(&self) -> Result<Vec<Repository>> {
        self.update(None)
    }

    /// Whether the repository's `min` version admits the running tool.
    ///
    /// A repository without a compatibility manifest is always compatible.
    pub fn is_compatible(&self, name: &str) -> Result<bool> {
        let path = self.repo_dir(name)?;
        let manifest = self.manifest(name, &path)?;
        Ok(manifest.is_none_or(|m| m.supports(&self.config.tool_version)))
    }

    /// Lint a directory, a repository, or every repository.
    ///
    /// A target containing a path separator (or `.`/`..`) is a directory;
    /// anything else names a repository, falling back to a directory of
    /// that name relative to the working directory.
    pub fn lint(&self, target: Option<&str>, options: LintOptions) -> Result<Vec<LintReport>> {
        let dirs = match target {
            Some(target) => vec![self.lint_target(target)?],
            None => self.list()?.into_iter().map(|repo| repo.path).collect(),
        };

        let mut reports = Vec::with_capacity(dirs.len());
        let mut failures = Vec::new();
        for dir in dirs {
            let report = self.linter.lint(&dir)?;
            let failing = report.failing_issues(options.only_errors);
            if !failing.is_empty() {
                let label = dir.file_name().unwrap_or(dir.as_str());
                failures.push(format!("`{label}` failed to pass lint:"));
                failures.extend(failing.iter().map(|issue| format!("  {issue}")));
            }
            reports.push(report);
        }

        if failures.is_empty() {
            Ok(reports)
        } else {
            Err(Error::informative(failures.join("\n")))
        }
    }

    /// Repositories under the root, sorted by name.
    pub fn list(&self) -> Result<Vec<Repository>> {
        let root = &self.config.repos_root;
        let mut repos = Vec::new();
        for name in io::list_subdirectories(root)? {
            if let Err(e) = validate_path_identifier(&name) {
                tracing::warn!(root = %root, error = %e, "Skipping entry");
                continue;
            }
            repos.push(Repository {
                path: root.join(&name),
                name,
            });
        }
        tracing::debug!(root = %root, count = repos.len(), "Listed spec repos");
        Ok(repos)
    }

    /// Current branch and remote url of a repository's working copy.
    pub fn status(&self, repo: &Repository) -> Result<RepoStatus> {
        Ok(RepoStatus {
            branch: self.vcs.current_branch(&repo.path)?,
            remote_url: self.vcs.remote_url(&repo.path, DEFAULT_REMOTE)?,
        })
    }

    /// Directory for `name`, rejecting names that are not a single component.
    pub fn repo_dir(&self, name: &str) -> Result<NormalizedPath> {
        validate_path_identifier(name).map_err(|e| Error::informative(e.to_string()))?;
        Ok(self.config.repo_dir(name))
    }

    fn clone_and_checkout(
        &self,
        url: &str,
        path: &NormalizedPath,
        branch: Option<&str>,
    ) -> Result<()> {
        self.vcs.clone_repo(url, path)?;
        if let Some(branch) = branch {
            let current = self.vcs.current_branch(path)?;
            if current.as_deref() != Some(branch) {
                tracing::debug!(path = %path, branch = %branch, "Checking out branch");
                self.vcs.checkout(path, branch)?;
            }
        }
        Ok(())
    }

    fn existing(&self, name: &str) -> Result<Repository> {
        let name = name.trim();
        let path = self.repo_dir(name)?;
        if !path.is_dir() {
            return Err(Error::informative(format!(
                "Unable to find a spec repo named `{name}`."
            )));
        }
        Ok(Repository {
            name: name.to_string(),
            path,
        })
    }

    fn ensure_compatible(&self, repo: &Repository) -> Result<()> {
        let running = &self.config.tool_version;
        if let Some(manifest) = self.manifest(&repo.name, &repo.path)?
            && !manifest.supports(running)
            && let Some(min) = manifest.min
        {
            return Err(Error::informative(format!(
                "The `{}` repo requires a tool version of {min} or higher (running {running}). \
                 Please update the tool.",
                repo.name
            )));
        }
        Ok(())
    }

    fn manifest(&self, name: &str, path: &NormalizedPath) -> Result<Option<VersionsManifest>> {
        VersionsManifest::load(path).map_err(|e| match e {
            specrepo_meta::Error::Fs(fs) => Error::Fs(fs),
            other => Error::informative(format!("The `{name}` repo is not usable: {other}")),
        })
    }

    fn lint_target(&self, target: &str) -> Result<NormalizedPath> {
        let target = target.trim();
        let is_path = target.contains(['/', '\\']) || target == "." || target == "..";

        if !is_path
            && validate_path_identifier(target).is_ok()
            && self.config.repo_dir(target).is_dir()
        {
            return Ok(self.config.repo_dir(target));
        }

        let dir = NormalizedPath::new(target);
        if !target.is_empty() && dir.is_dir() {
            return Ok(dir);
        }

        Err(Error::informative(if is_path {
            format!("Unable to find a directory at `{target}`.")
        } else {
            format!("Unable to find a spec repo named `{target}`.")
        }))
    }
}
