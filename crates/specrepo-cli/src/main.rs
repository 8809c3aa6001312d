//! Spec repository manager CLI
//!
//! Adds, updates, lints and lists the spec repositories kept under a
//! repositories root.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Repo { action }) => {
            let root = context::resolve_repos_root(cli.repos_dir)?;
            commands::run_repo(root, action)
        }
        Some(Commands::Completions { shell }) => {
            commands::run_completions(shell);
            Ok(())
        }
        None => {
            println!("{} Spec repository manager", "specs".green().bold());
            println!();
            println!("Run {} for available commands.", "specs --help".cyan());
            Ok(())
        }
    }
}

/// DEBUG on stderr with `--verbose`, otherwise whatever `RUST_LOG` asks for.
fn init_tracing(verbose: bool) {
    let result = if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };

    match result {
        Ok(()) => tracing::debug!("Verbose mode enabled"),
        Err(e) => eprintln!("{}: {}", "warning".yellow().bold(), e),
    }
}
