//! Metadata handling for the spec repository manager.
//!
//! - [`manifest`]: the per-repository compatibility manifest
//! - [`version`]: lenient version parsing shared by manifests and specs
//! - [`spec`]: schema of a package spec file
//! - [`lint`]: the [`Linter`] capability and the structural [`SpecLinter`]

pub mod error;
pub mod lint;
pub mod manifest;
pub mod spec;
pub mod version;

pub use error::{Error, Result};
pub use lint::{LintIssue, LintLevel, LintReport, Linter, SpecLinter};
pub use manifest::{VERSIONS_FILENAME, VersionsManifest};
pub use spec::{License, SPEC_SUFFIXES, SpecMetadata, is_spec_file};
pub use version::ToolVersion;
