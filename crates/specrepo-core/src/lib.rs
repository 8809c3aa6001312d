//! Repository lifecycle manager for spec repositories
//!
//! A spec repository is a git working copy of package metadata living at
//! `<repos root>/<name>`. This crate coordinates the lower layers to add,
//! update and lint such repositories, and to decide whether a repository
//! is usable with the running tool version.
//!
//! # Architecture
//!
//! ```text
//!                 CLI
//!                  |
//!            specrepo-core
//!                  |
//!      +-----------+-----------+
//!      |                       |
//! specrepo-git           specrepo-meta
//!      |                       |
//!      +------ specrepo-fs ----+
//! ```
//!
//! # Example
//!
//! ```no_run
//! use specrepo_core::{RepoManager, ReposConfig, Result};
//!
//! fn example() -> Result<()> {
//!     let manager = RepoManager::new(ReposConfig::new("/home/me/.specs/repos"));
//!     manager.add("master", "https://example.com/specs.git", None)?;
//!     assert!(manager.is_compatible("master")?);
//!     manager.update(None)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod manager;

pub use config::{ReposConfig, UserSettings, current_tool_version};
pub use error::{Error, Result};
pub use manager::{LintOptions, RepoManager, RepoStatus, Repository};
pub use specrepo_meta::{LintIssue, LintLevel, LintReport, ToolVersion};
