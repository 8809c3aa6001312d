//! Error types for specrepo-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] specrepo_fs::Error),

    #[error("Unable to read versions file at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    #[error("Invalid version '{version}': {message}")]
    InvalidVersion { version: String, message: String },
}
