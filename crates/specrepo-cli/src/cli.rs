//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Spec repository manager - add, update and lint spec repositories
#[derive(Parser, Debug)]
#[command(name = "specs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the spec repositories (default: ~/.specs/repos)
    #[arg(long, global = true, env = "SPECS_REPOS_DIR", value_name = "DIR")]
    pub repos_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Manage spec repositories
    Repo {
        #[command(subcommand)]
        action: RepoAction,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   specs completions bash > ~/.local/share/bash-completion/completions/specs
    ///   specs completions zsh > ~/.zfunc/_specs
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Spec repository actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RepoAction {
    /// Clone a spec repository
    ///
    /// Examples:
    ///   specs repo add master https://example.com/specs.git
    ///   specs repo add beta https://example.com/specs.git beta
    Add {
        /// Name of the repository under the repos root
        name: Option<String>,

        /// URL to clone
        url: Option<String>,

        /// Branch to check out after cloning
        branch: Option<String>,
    },

    /// Pull one repository, or all of them
    Update {
        /// Repository to update (default: every repository)
        name: Option<String>,
    },

    /// Validate the specs of a repository or directory
    ///
    /// An argument containing a path separator is a directory, anything else
    /// names a repository.
    Lint {
        /// Repository name or directory (default: every repository)
        target: Option<String>,

        /// Only fail on errors, not warnings
        #[arg(long)]
        only_errors: bool,
    },

    /// List repositories with their branch and remote
    List,
}
