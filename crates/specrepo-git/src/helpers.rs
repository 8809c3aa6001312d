//! git2 routines shared by the client
//!
//! Each function works on an already opened [`Repository`].

use git2::{BranchType, Repository, build::CheckoutBuilder};

use crate::{Error, Result};

/// Get the current branch name from a repository.
///
/// Returns the branch name if HEAD points to a branch, or `None` if HEAD is detached.
pub fn get_current_branch(repo: &Repository) -> Result<Option<String>> {
    let head = repo.head()?;

    if head.is_branch() {
        Ok(head.shorthand().map(str::to_string))
    } else {
        Ok(None)
    }
}

/// Check out a local branch, creating it from `<remote>/<name>` if needed.
///
/// A branch created this way tracks the remote branch so later pulls
/// fetch the right ref.
pub fn checkout_branch(repo: &Repository, name: &str, remote: &str) -> Result<()> {
    let branch = match repo.find_branch(name, BranchType::Local) {
        Ok(branch) => branch,
        Err(_) => {
            let remote_branch_name = format!("{remote}/{name}");
            let remote_branch = repo
                .find_branch(&remote_branch_name, BranchType::Remote)
                .map_err(|_| Error::BranchNotFound {
                    name: name.to_string(),
                })?;
            let commit = remote_branch.get().peel_to_commit()?;

            let mut local = repo.branch(name, &commit, false)?;
            local.set_upstream(Some(remote_branch_name.as_str()))?;
            tracing::debug!(branch = %name, upstream = %remote_branch_name, "Created tracking branch");
            local
        }
    };

    let refname = branch
        .get()
        .name()
        .ok_or_else(|| Error::BranchNotFound {
            name: name.to_string(),
        })?
        .to_string();

    let target = repo.revparse_single(&refname)?;
    repo.checkout_tree(&target, Some(CheckoutBuilder::new().safe()))?;
    repo.set_head(&refname)?;

    Ok(())
}

/// Pull `branch` from `remote` using fetch + fast-forward.
///
/// An up-to-date branch is left untouched. Diverged histories are
/// rejected with [`Error::CannotFastForward`]; local edits in a spec
/// repository are not something this tool merges.
pub fn fast_forward_pull(repo: &Repository, remote: &str, branch: &str) -> Result<()> {
    let mut remote_handle = repo
        .find_remote(remote)
        .map_err(|_| Error::RemoteNotFound {
            name: remote.to_string(),
        })?;

    remote_handle
        .fetch(&[branch], None, None)
        .map_err(|e| Error::PullFailed {
            message: format!("Fetch failed: {}", e.message()),
        })?;

    let fetch_head = repo
        .find_reference("FETCH_HEAD")
        .map_err(|e| Error::PullFailed {
            message: format!("Could not find FETCH_HEAD: {}", e.message()),
        })?;

    let fetch_commit = fetch_head.peel_to_commit().map_err(|e| Error::PullFailed {
        message: format!("Could not resolve FETCH_HEAD: {}", e.message()),
    })?;

    let head_commit = repo.head()?.peel_to_commit()?;
    let annotated = repo.find_annotated_commit(fetch_commit.id())?;
    let (analysis, _) = repo.merge_analysis(&[&annotated])?;

    if analysis.is_up_to_date() {
        tracing::debug!(branch = %branch, "Already up to date");
        return Ok(());
    }

    if analysis.is_fast_forward() {
        let refname = format!("refs/heads/{branch}");
        let mut reference = repo.find_reference(&refname)?;
        reference.set_target(
            fetch_commit.id(),
            &format!("pull: fast-forward to {}", fetch_commit.id()),
        )?;
        repo.checkout_head(Some(CheckoutBuilder::default().force()))?;
        tracing::debug!(branch = %branch, commit = %fetch_commit.id(), "Fast-forwarded");
        return Ok(());
    }

    Err(Error::CannotFastForward {
        message: format!(
            "Cannot fast-forward {} from {} to {}. Manual merge required.",
            branch,
            head_commit.id(),
            fetch_commit.id()
        ),
    })
}
