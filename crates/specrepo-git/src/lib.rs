//! Version-control collaborator for the spec repository manager
//!
//! The manager only talks to the [`VersionControl`] trait; [`Git2Client`]
//! is the production implementation backed by libgit2.

pub mod client;
pub mod error;
pub mod helpers;
pub mod vcs;

pub use client::Git2Client;
pub use error::{Error, Result};
pub use helpers::{checkout_branch, fast_forward_pull, get_current_branch};
pub use vcs::{DEFAULT_REMOTE, VersionControl};
