//! Shared test utilities for the spec repository manager workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`]: upstream git repositories built with `git2`
//! - [`repo`]: [`repo::ReposRoot`] for a temporary repositories root
//! - [`specs`]: spec file and compatibility manifest writers

pub mod git;
pub mod repo;
pub mod specs;
