//! Command implementations

mod completions;
mod repo;

pub use completions::run_completions;
pub use repo::run_repo;
