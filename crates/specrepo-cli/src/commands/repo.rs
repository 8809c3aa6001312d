//! `specs repo` subcommands

use colored::Colorize;
use specrepo_core::{LintOptions, LintReport, RepoManager, ReposConfig};
use specrepo_fs::NormalizedPath;

use crate::cli::RepoAction;
use crate::error::Result;

/// Dispatch a repo action against the repositories under `root`.
pub fn run_repo(root: NormalizedPath, action: RepoAction) -> Result<()> {
    let manager = RepoManager::new(ReposConfig::new(root));
    match action {
        RepoAction::Add { name, url, branch } => run_add(
            &manager,
            name.as_deref().unwrap_or_default(),
            url.as_deref().unwrap_or_default(),
            branch.as_deref(),
        ),
        RepoAction::Update { name } => run_update(&manager, name.as_deref()),
        RepoAction::Lint {
            target,
            only_errors,
        } => run_lint(&manager, target.as_deref(), only_errors),
        RepoAction::List => run_list(&manager),
    }
}

/// Run the `repo add` command.
pub fn run_add(manager: &RepoManager, name: &str, url: &str, branch: Option<&str>) -> Result<()> {
    if !name.trim().is_empty() && !url.trim().is_empty() {
        println!(
            "{} Cloning {} into {}",
            "=>".blue().bold(),
            url.trim().yellow(),
            name.trim().cyan()
        );
    }
    let repo = manager.add(name, url, branch)?;

    println!(
        "{} Added spec repo {} from {}",
        "OK".green().bold(),
        repo.name.cyan(),
        url.trim().yellow()
    );
    if let Some(branch) = branch {
        println!("   on branch {}", branch.cyan());
    }
    Ok(())
}

/// Run the `repo update` command.
pub fn run_update(manager: &RepoManager, name: Option<&str>) -> Result<()> {
    let updated = manager.update(name)?;

    if updated.is_empty() {
        println!(
            "{} No spec repos found in {}",
            "=>".blue().bold(),
            manager.config().repos_root.to_string().dimmed()
        );
        return Ok(());
    }

    for repo in &updated {
        println!("{} Updated spec repo {}", "OK".green().bold(), repo.name.cyan());
    }
    Ok(())
}

/// Run the `repo lint` command.
pub fn run_lint(manager: &RepoManager, target: Option<&str>, only_errors: bool) -> Result<()> {
    let reports = manager.lint(target, LintOptions { only_errors })?;

    if reports.is_empty() {
        println!("{} No spec repos to lint", "=>".blue().bold());
    }
    for report in &reports {
        print_passed(report);
    }
    Ok(())
}

fn print_passed(report: &LintReport) {
    for issue in report.warnings() {
        println!("   {} {}", "-".yellow(), issue);
    }
    let label = report.root.file_name().unwrap_or(report.root.as_str());
    println!(
        "{} {} passed lint ({} specs checked)",
        "OK".green().bold(),
        label.cyan(),
        report.specs_checked
    );
}

/// Run the `repo list` command.
pub fn run_list(manager: &RepoManager) -> Result<()> {
    let repos = manager.list()?;

    if repos.is_empty() {
        println!(
            "No spec repos in {}. Use {} to add one.",
            manager.config().repos_root.to_string().dimmed(),
            "specs repo add <name> <url>".cyan()
        );
        return Ok(());
    }

    for repo in &repos {
        println!("{}", repo.name.bold());
        match manager.status(repo) {
            Ok(status) => {
                let branch = status.branch.unwrap_or_else(|| "(detached)".to_string());
                let url = status.remote_url.unwrap_or_else(|| "(no remote)".to_string());
                println!("  - Branch: {}", branch.cyan());
                println!("  - URL:    {}", url.yellow());
            }
            Err(e) => {
                tracing::warn!(repo = %repo.name, error = %e, "Could not read working copy");
                println!("  - {}", "not a git working copy".red());
            }
        }
        println!("  - Path:   {}", repo.path.to_string().dimmed());
    }
    Ok(())
}
