//! Error types for specrepo-core

/// Result type for specrepo-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in specrepo-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// User-facing problem, meant to be shown as is: missing arguments,
    /// an incompatible repository, lint failures.
    #[error("{message}")]
    Informative { message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from specrepo-fs
    #[error(transparent)]
    Fs(#[from] specrepo_fs::Error),

    /// Version control error from specrepo-git
    #[error(transparent)]
    Git(#[from] specrepo_git::Error),

    /// Metadata error from specrepo-meta
    #[error(transparent)]
    Meta(#[from] specrepo_meta::Error),
}

impl Error {
    /// Create a user-facing error with the given message
    pub fn informative(message: impl Into<String>) -> Self {
        Self::Informative {
            message: message.into(),
        }
    }

    pub fn is_informative(&self) -> bool {
        matches!(self, Self::Informative { .. })
    }
}
