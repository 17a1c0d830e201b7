//! Repository migration command.

use std::path::Path;

use colored::Colorize;
use git_commander_core::{
    migrate_repository, MigrationOutcome, MigrationRequest, RepositoryHost, VersionControl,
};

use crate::errors::Error;

#[cfg(test)]
#[path = "migrate_cmd_tests.rs"]
mod tests;

/// Handles "Migrate Repository".
///
/// Collects the four migration parameters through the injected closure, then
/// runs the migration workflow with the current directory as the working
/// area. Any step failure aborts the run; the workflow performs its own
/// best-effort cleanup of partial state.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if any parameter is empty, before any
/// remote call is made, or the failing step's error otherwise.
pub async fn handle_migrate_command<H, V, F>(
    host: &H,
    vcs: &V,
    ask: F,
) -> Result<MigrationOutcome, Error>
where
    H: RepositoryHost + ?Sized,
    V: VersionControl + ?Sized,
    F: Fn(&str) -> Result<String, Error>,
{
    println!("{}", "\nMigrate Repository".bold());

    let source_repo_url = ask("Enter the URL of the source repository:")?;
    let new_repo_name = ask("Enter the name for the new repository:")?;
    let new_author_name = ask("Enter the new author name:")?;
    let new_author_email = ask("Enter the new author email:")?;

    let request = MigrationRequest::new(
        source_repo_url,
        new_repo_name,
        new_author_name,
        new_author_email,
    )?;

    let outcome = migrate_repository(host, vcs, &request, Path::new(".")).await?;

    println!(
        "{}",
        "\nRepository migration completed successfully.".green()
    );
    println!("New repository: {}", outcome.repository.html_url());

    Ok(outcome)
}
