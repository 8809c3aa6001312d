//! Upstream git repositories for clone and pull scenarios.
//!
//! Everything is built with `git2` and an explicit signature, so the tests
//! need neither a `git` binary nor a configured user identity.

use std::fs;
use std::path::Path;

use git2::{IndexAddOption, Oid, Repository, Signature, build::CheckoutBuilder};

/// Line appended to `README` by [`make_change`].
pub const CHANGE_MARKER: &str = "Added!";

fn signature() -> Signature<'static> {
    Signature::now("Test User", "test@example.com")
        .unwrap_or_else(|e| panic!("failed to build signature: {e}"))
}

/// Stage every file in the working tree and commit it on HEAD.
///
/// # Panics
/// Panics if any git operation fails.
pub fn commit_all(repo: &Repository, message: &str) -> Oid {
    let mut index = repo.index().unwrap();
    index
        .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    let sig = signature();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap_or_else(|e| panic!("commit_all: failed to commit '{message}': {e}"))
}

/// Initialise a repository at `path` with a `README` and one commit.
///
/// # Panics
/// Panics if any git or filesystem operation fails.
pub fn init_with_commit(path: &Path) -> Repository {
    fs::create_dir_all(path).unwrap();
    let repo = Repository::init(path).unwrap_or_else(|e| {
        panic!("init_with_commit: failed to init {}: {e}", path.display())
    });
    fs::write(path.join("README"), "Spec repository\n").unwrap();
    commit_all(&repo, "Initial commit");
    repo
}

/// Append [`CHANGE_MARKER`] to the `README` of the repository at `path` and commit.
///
/// # Panics
/// Panics if the repository cannot be opened or committed to.
pub fn make_change(path: &Path) -> Oid {
    let repo = Repository::open(path).unwrap();
    let readme = path.join("README");
    let mut content = fs::read_to_string(&readme).unwrap_or_default();
    content.push_str(CHANGE_MARKER);
    content.push('\n');
    fs::write(&readme, content).unwrap();
    commit_all(&repo, "Change README")
}

/// Name of the branch HEAD points at.
///
/// # Panics
/// Panics if HEAD is detached or unreadable.
pub fn head_branch(path: &Path) -> String {
    let repo = Repository::open(path).unwrap();
    let head = repo.head().unwrap();
    assert!(head.is_branch(), "HEAD of {} is detached", path.display());
    head.shorthand().unwrap().to_string()
}

/// Check out an existing local branch, discarding local modifications.
pub fn switch_branch(repo: &Repository, name: &str) {
    let refname = format!("refs/heads/{name}");
    let target = repo.revparse_single(&refname).unwrap();
    repo.checkout_tree(&target, Some(CheckoutBuilder::new().force()))
        .unwrap();
    repo.set_head(&refname).unwrap();
}

/// Create `branch` from HEAD, commit `file` with `content` on it and switch back.
///
/// Leaves the repository on the branch it started on.
pub fn commit_on_branch(path: &Path, branch: &str, file: &str, content: &str) -> Oid {
    let repo = Repository::open(path).unwrap();
    let original = head_branch(path);

    if repo.find_branch(branch, git2::BranchType::Local).is_err() {
        let head_commit = repo.head().unwrap().peel_to_commit().unwrap();
        repo.branch(branch, &head_commit, false).unwrap();
    }

    switch_branch(&repo, branch);
    let file_path = path.join(file);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    let oid = commit_all(&repo, &format!("Add {file} on {branch}"));
    switch_branch(&repo, &original);
    oid
}
