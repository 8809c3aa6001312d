//! Error types for specrepo-git

use std::path::PathBuf;

/// Result type for specrepo-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in specrepo-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] specrepo_fs::Error),

    #[error("Failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },

    #[error("Branch '{name}' not found")]
    BranchNotFound { name: String },

    #[error("Remote '{name}' not found")]
    RemoteNotFound { name: String },

    #[error("Pull failed: {message}")]
    PullFailed { message: String },

    #[error("{message}")]
    CannotFastForward { message: String },

    #[error("HEAD is detached in {path}, cannot determine the branch to pull")]
    DetachedHead { path: PathBuf },
}
