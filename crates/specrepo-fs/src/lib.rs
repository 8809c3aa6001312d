//! Filesystem helpers for the spec repository manager
//!
//! Provides normalized path handling, directory listing and
//! format-agnostic loading of small configuration files.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::{NormalizedPath, validate_path_identifier};
